/// Exponential approach toward a target, expressed as a fraction covered per
/// reference frame and converted to elapsed time so the perceived speed does
/// not depend on the display refresh rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    per_frame: f64,
    reference_fps: f64,
    max_dt_sec: f64,
}

impl Smoothing {
    pub fn new(per_frame: f64, reference_fps: f64, max_dt_sec: f64) -> Self {
        Self {
            per_frame: per_frame.clamp(0.0, 1.0),
            reference_fps,
            max_dt_sec,
        }
    }

    /// Duration of one reference frame in seconds.
    #[inline]
    pub fn reference_dt(&self) -> f64 {
        1.0 / self.reference_fps
    }

    /// Blend amount for `dt_sec` of elapsed time.
    ///
    /// One reference frame yields exactly `per_frame`; two frames yield
    /// `1 - (1 - per_frame)^2`, and so on.
    pub fn factor(&self, dt_sec: f64) -> f64 {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, self.max_dt_sec)
        } else {
            self.reference_dt()
        };
        let frames = dt * self.reference_fps;
        1.0 - (1.0 - self.per_frame).powf(frames)
    }

    #[inline]
    pub fn approach(&self, current: f64, target: f64, dt_sec: f64) -> f64 {
        current + (target - current) * self.factor(dt_sec)
    }
}
