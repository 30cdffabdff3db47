//! Progress bar ratio, page counter label and active-panel tracking.

use crate::smoothing::Smoothing;

/// Emitted when the active panel changes. `previous` is `None` on the first
/// frame after mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelChange {
    pub previous: Option<usize>,
    pub current: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressFrame {
    pub ratio: f64,
    pub panel_index: usize,
    pub label: String,
    pub change: Option<PanelChange>,
}

#[derive(Debug)]
pub struct ProgressIndicator {
    panel_count: usize,
    ratio: f64,
    active: Option<usize>,
    smoothing: Smoothing,
}

/// `"03 / 07"` style counter, one-based.
pub fn format_label(panel_index: usize, panel_count: usize) -> String {
    format!("{:02} / {:02}", panel_index + 1, panel_count)
}

#[inline]
fn ratio_target(position: f64, max_scroll: f64) -> f64 {
    if max_scroll > 0.0 {
        (position / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl ProgressIndicator {
    pub fn new(panel_count: usize, smoothing: Smoothing) -> Self {
        Self {
            panel_count,
            ratio: 0.0,
            active: None,
            smoothing,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn panel_index(&self, position: f64, panel_width: f64) -> usize {
        if self.panel_count == 0 || panel_width <= 0.0 {
            return 0;
        }
        let idx = (position / panel_width).round().max(0.0) as usize;
        idx.min(self.panel_count - 1)
    }

    pub fn update(
        &mut self,
        position: f64,
        panel_width: f64,
        max_scroll: f64,
        dt_sec: f64,
    ) -> ProgressFrame {
        let target = ratio_target(position, max_scroll);
        self.ratio = self.smoothing.approach(self.ratio, target, dt_sec);
        let panel_index = self.panel_index(position, panel_width);
        let change = self.mark_active(panel_index);
        ProgressFrame {
            ratio: self.ratio,
            panel_index,
            label: format_label(panel_index, self.panel_count),
            change,
        }
    }

    /// Snap the smoothed ratio onto its target once scrolling has stopped.
    pub fn settle(&mut self, position: f64, max_scroll: f64) {
        self.ratio = ratio_target(position, max_scroll);
    }

    fn mark_active(&mut self, panel_index: usize) -> Option<PanelChange> {
        if self.panel_count == 0 || self.active == Some(panel_index) {
            return None;
        }
        let change = PanelChange {
            previous: self.active,
            current: panel_index,
        };
        self.active = Some(panel_index);
        Some(change)
    }
}
