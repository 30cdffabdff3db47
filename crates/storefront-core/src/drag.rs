use crate::config::PointerKind;

/// An open pointer or touch drag. Lives from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub kind: PointerKind,
    pub start_pointer_x: f64,
    pub start_position: f64,
    pub last_pointer_x: f64,
    pub last_time_ms: f64,
    pub velocity: f64,
}

impl DragSession {
    pub fn open(kind: PointerKind, pointer_x: f64, position: f64, time_ms: f64) -> Self {
        Self {
            kind,
            start_pointer_x: pointer_x,
            start_position: position,
            last_pointer_x: pointer_x,
            last_time_ms: time_ms,
            velocity: 0.0,
        }
    }

    /// Unclamped scroll position that keeps the content under the pointer.
    #[inline]
    pub fn position_for(&self, pointer_x: f64) -> f64 {
        self.start_position - (pointer_x - self.start_pointer_x)
    }

    /// Record a move sample. Velocity is only refreshed when time advanced,
    /// so coalesced events with identical timestamps keep the previous value.
    pub fn record(&mut self, pointer_x: f64, time_ms: f64, velocity_scale: f64) {
        let elapsed = time_ms - self.last_time_ms;
        if elapsed > 0.0 && elapsed.is_finite() {
            self.velocity = (self.last_pointer_x - pointer_x) / elapsed * velocity_scale;
        }
        self.last_pointer_x = pointer_x;
        self.last_time_ms = time_ms;
    }
}
