use crate::constants::{DEFAULT_PARALLAX_SPEED, PARALLAX_DAMPENING};

/// Horizontal offset of a parallax element for a scroll position.
#[inline]
pub fn parallax_offset(position: f64, speed: f64, dampening: f64) -> f64 {
    -position * speed * dampening
}

/// Read a `data-speed` style value. Missing, malformed and non-finite values
/// fall back to `fallback`.
pub fn parse_speed(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Speed factors for every registered parallax element, in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayer {
    speeds: Vec<f64>,
    dampening: f64,
    default_speed: f64,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(PARALLAX_DAMPENING, DEFAULT_PARALLAX_SPEED)
    }
}

impl ParallaxLayer {
    pub fn new(dampening: f64, default_speed: f64) -> Self {
        Self {
            speeds: Vec::new(),
            dampening,
            default_speed,
        }
    }

    /// Register an element by its raw speed attribute; returns its slot.
    pub fn register(&mut self, raw_speed: Option<&str>) -> usize {
        self.speeds.push(parse_speed(raw_speed, self.default_speed));
        self.speeds.len() - 1
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn offsets(&self, position: f64) -> impl Iterator<Item = f64> + '_ {
        self.speeds
            .iter()
            .map(move |&speed| parallax_offset(position, speed, self.dampening))
    }
}
