//! Horizontal panel scrolling driven by wheel, drag and direct navigation.
//!
//! Inputs only move the *target*; [`ScrollAnimator::step`] eases the
//! *current* position toward it once per animation frame. Input methods return
//! `true` when the animator left the idle state, which tells the host to
//! schedule a frame.

use crate::config::{PointerKind, ScrollConfig};
use crate::drag::DragSession;
use crate::routing::NavCommand;
use crate::smoothing::Smoothing;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current: f64,
    pub target: f64,
    pub panel_width: f64,
    pub max_scroll: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

#[derive(Debug)]
pub struct ScrollAnimator {
    state: ScrollState,
    panel_count: usize,
    drag: Option<DragSession>,
    phase: Phase,
    last_frame_ms: Option<f64>,
    smoothing: Smoothing,
    config: ScrollConfig,
}

impl ScrollAnimator {
    pub fn new(panel_count: usize, viewport_width: f64, config: ScrollConfig) -> Self {
        let mut animator = Self {
            state: ScrollState::default(),
            panel_count,
            drag: None,
            phase: Phase::Idle,
            last_frame_ms: None,
            smoothing: config.position_smoothing(),
            config,
        };
        animator.apply_width(viewport_width);
        animator
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }
    pub fn current(&self) -> f64 {
        self.state.current
    }
    pub fn target(&self) -> f64 {
        self.state.target
    }
    pub fn panel_width(&self) -> f64 {
        self.state.panel_width
    }
    pub fn max_scroll(&self) -> f64 {
        self.state.max_scroll
    }
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Panel nearest to the rendered position.
    pub fn current_panel_index(&self) -> usize {
        self.index_at(self.state.current)
    }

    /// Panel nearest to the position being animated toward.
    pub fn target_panel_index(&self) -> usize {
        self.index_at(self.state.target)
    }

    fn index_at(&self, position: f64) -> usize {
        if self.is_inert() {
            return 0;
        }
        let idx = (position / self.state.panel_width).round().max(0.0) as usize;
        idx.min(self.panel_count - 1)
    }

    /// No panels or no measurable width: every input is ignored.
    #[inline]
    fn is_inert(&self) -> bool {
        self.panel_count == 0 || self.state.panel_width <= 0.0
    }

    #[inline]
    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.state.max_scroll)
    }

    fn wake(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Animating;
            self.last_frame_ms = None;
            true
        } else {
            false
        }
    }

    fn apply_width(&mut self, viewport_width: f64) {
        let width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        self.state.panel_width = width;
        self.state.max_scroll = self.panel_count.saturating_sub(1) as f64 * width;
    }

    pub fn set_target(&mut self, panel_index: usize) -> bool {
        if self.is_inert() {
            return false;
        }
        self.state.target = self.clamp(panel_index as f64 * self.state.panel_width);
        log::debug!("[scroll] target panel {} -> {:.1}px", panel_index, self.state.target);
        self.wake()
    }

    pub fn navigate(&mut self, cmd: NavCommand) -> bool {
        if self.is_inert() {
            return false;
        }
        let from = self.target_panel_index();
        let to = match cmd {
            NavCommand::Next => from + 1,
            NavCommand::Previous => from.saturating_sub(1),
            NavCommand::First => 0,
            NavCommand::Last => self.panel_count - 1,
        };
        self.set_target(to)
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if self.is_inert() || !delta_y.is_finite() {
            return false;
        }
        self.state.target = self.clamp(self.state.target + delta_y);
        self.wake()
    }

    /// Open a drag session. Returns `false` if one is already open; the
    /// earlier session keeps ownership until it ends.
    pub fn on_drag_start(&mut self, pointer_x: f64, kind: PointerKind, time_ms: f64) -> bool {
        if self.is_inert() || self.drag.is_some() || !pointer_x.is_finite() {
            return false;
        }
        self.drag = Some(DragSession::open(kind, pointer_x, self.state.current, time_ms));
        log::debug!("[drag] start {:?} at x={:.1}", kind, pointer_x);
        true
    }

    pub fn on_drag_move(&mut self, pointer_x: f64, time_ms: f64) -> bool {
        if !pointer_x.is_finite() {
            return false;
        }
        let Some(mut session) = self.drag else {
            return false;
        };
        let scale = self.config.velocity_scale(session.kind);
        session.record(pointer_x, time_ms, scale);
        self.state.target = self.clamp(session.position_for(pointer_x));
        self.drag = Some(session);
        self.wake()
    }

    pub fn on_drag_end(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        let width = self.state.panel_width;
        let mut target = self.state.target;
        if session.velocity.abs() > self.config.momentum_threshold {
            target += session.velocity * self.config.momentum_scale(session.kind);
        }
        target = self.clamp(target);
        if width > 0.0 {
            target = self.clamp((target / width).round() * width);
        }
        self.state.target = target;
        log::debug!(
            "[drag] end v={:.2} -> panel {}",
            session.velocity,
            self.target_panel_index()
        );
        self.wake()
    }

    /// Close any open drag without momentum or snapping.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("[drag] cancelled");
        }
    }

    /// Advance one animation frame. Returns whether another frame is needed.
    pub fn step(&mut self, timestamp_ms: f64) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        let dt_sec = match self.last_frame_ms {
            Some(prev) => (timestamp_ms - prev) / 1000.0,
            None => self.smoothing.reference_dt(),
        };
        self.last_frame_ms = Some(timestamp_ms);

        let ScrollState { current, target, .. } = self.state;
        self.state.current = self.smoothing.approach(current, target, dt_sec);

        let settled = (self.state.target - self.state.current).abs()
            <= self.config.settle_tolerance_px;
        if settled && self.drag.is_none() {
            self.state.current = self.state.target;
            self.phase = Phase::Idle;
            self.last_frame_ms = None;
            return false;
        }
        true
    }

    /// Re-measure after a viewport change. Jumps straight to the panel that was
    /// showing; an open drag is cancelled because its coordinates are stale.
    pub fn on_resize(&mut self, viewport_width: f64) {
        let resting = self.current_panel_index();
        self.cancel_drag();
        self.apply_width(viewport_width);
        let position = self.clamp(resting as f64 * self.state.panel_width);
        self.state.target = position;
        self.state.current = position;
        self.phase = Phase::Idle;
        self.last_frame_ms = None;
    }
}
