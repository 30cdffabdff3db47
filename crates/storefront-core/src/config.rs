//! Tuning parameters for the panel scroller and carousel strips.
//!
//! Defaults mirror the constants in [`crate::constants`]; the web front-end
//! may override individual fields from `data-*` attributes and must call
//! [`ScrollConfig::validate`] before handing the result to the animator.

use crate::constants::*;
use crate::smoothing::Smoothing;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    SmoothFactor(f64),
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("carousel breakpoints must be non-empty and sorted by width")]
    Breakpoints,
    #[error("carousel breakpoint at {0}px shows zero items")]
    ZeroVisible(f64),
}

/// Which input device produced a drag. Velocity and momentum scale differently
/// for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub smooth_factor: f64,
    pub reference_fps: f64,
    pub progress_smooth_multiplier: f64,
    pub max_frame_delta_sec: f64,
    pub settle_tolerance_px: f64,
    pub mouse_velocity_scale: f64,
    pub touch_velocity_scale: f64,
    pub mouse_momentum_scale: f64,
    pub touch_momentum_scale: f64,
    pub momentum_threshold: f64,
    pub parallax_dampening: f64,
    pub default_parallax_speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_factor: SMOOTH_FACTOR,
            reference_fps: REFERENCE_FPS,
            progress_smooth_multiplier: PROGRESS_SMOOTH_MULTIPLIER,
            max_frame_delta_sec: MAX_FRAME_DELTA_SEC,
            settle_tolerance_px: SETTLE_TOLERANCE_PX,
            mouse_velocity_scale: MOUSE_VELOCITY_SCALE,
            touch_velocity_scale: TOUCH_VELOCITY_SCALE,
            mouse_momentum_scale: MOUSE_MOMENTUM_SCALE,
            touch_momentum_scale: TOUCH_MOMENTUM_SCALE,
            momentum_threshold: MOMENTUM_VELOCITY_THRESHOLD,
            parallax_dampening: PARALLAX_DAMPENING,
            default_parallax_speed: DEFAULT_PARALLAX_SPEED,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let progress = self.smooth_factor * self.progress_smooth_multiplier;
        if !(self.smooth_factor > 0.0 && self.smooth_factor <= 1.0) {
            return Err(ConfigError::SmoothFactor(self.smooth_factor));
        }
        if !(progress > 0.0 && progress <= 1.0) {
            return Err(ConfigError::SmoothFactor(progress));
        }
        positive("reference_fps", self.reference_fps)?;
        positive("max_frame_delta_sec", self.max_frame_delta_sec)?;
        positive("settle_tolerance_px", self.settle_tolerance_px)?;
        positive("mouse_velocity_scale", self.mouse_velocity_scale)?;
        positive("touch_velocity_scale", self.touch_velocity_scale)?;
        non_negative("mouse_momentum_scale", self.mouse_momentum_scale)?;
        non_negative("touch_momentum_scale", self.touch_momentum_scale)?;
        non_negative("momentum_threshold", self.momentum_threshold)?;
        non_negative("parallax_dampening", self.parallax_dampening)?;
        if !self.default_parallax_speed.is_finite() {
            return Err(ConfigError::Negative {
                name: "default_parallax_speed",
                value: self.default_parallax_speed,
            });
        }
        Ok(())
    }

    pub fn position_smoothing(&self) -> Smoothing {
        Smoothing::new(self.smooth_factor, self.reference_fps, self.max_frame_delta_sec)
    }

    pub fn progress_smoothing(&self) -> Smoothing {
        Smoothing::new(
            self.smooth_factor * self.progress_smooth_multiplier,
            self.reference_fps,
            self.max_frame_delta_sec,
        )
    }

    #[inline]
    pub fn velocity_scale(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse_velocity_scale,
            PointerKind::Touch => self.touch_velocity_scale,
        }
    }

    #[inline]
    pub fn momentum_scale(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse_momentum_scale,
            PointerKind::Touch => self.touch_momentum_scale,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// Viewport breakpoints for a carousel strip, ascending by minimum width.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub breakpoints: Vec<(f64, usize)>,
}

impl CarouselConfig {
    pub fn new(breakpoints: &[(f64, usize)]) -> Self {
        Self {
            breakpoints: breakpoints.to_vec(),
        }
    }

    pub fn product_strip() -> Self {
        Self::new(&PRODUCT_STRIP_BREAKPOINTS)
    }

    pub fn certificate_strip() -> Self {
        Self::new(&CERTIFICATE_STRIP_BREAKPOINTS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoints.is_empty() {
            return Err(ConfigError::Breakpoints);
        }
        if self.breakpoints.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(ConfigError::Breakpoints);
        }
        if let Some(&(width, _)) = self.breakpoints.iter().find(|(_, n)| *n == 0) {
            return Err(ConfigError::ZeroVisible(width));
        }
        Ok(())
    }

    /// Visible item count for a viewport width. Widths below the first
    /// breakpoint use the first entry; an empty table shows one item.
    pub fn visible_for(&self, viewport_width: f64) -> usize {
        let mut visible = self.breakpoints.first().map(|b| b.1).unwrap_or(1);
        for &(min_width, n) in &self.breakpoints {
            if viewport_width >= min_width {
                visible = n;
            }
        }
        visible.max(1)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::product_strip()
    }
}
