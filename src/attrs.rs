use crate::constants::{
    ATTR_MOUSE_MOMENTUM, ATTR_MOUSE_VELOCITY, ATTR_SMOOTH_FACTOR, ATTR_TOUCH_MOMENTUM,
    ATTR_TOUCH_VELOCITY,
};
use storefront_core::ScrollConfig;

/// Parse a numeric attribute; `None` when absent, blank or not a finite number.
#[inline]
pub fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a panel index from a `data-panel` attribute.
#[inline]
pub fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}

/// Apply attribute overrides onto `base`. Each entry is `(attribute, raw value)`.
/// Returns the merged config and the attributes that were present but unusable.
pub fn apply_overrides<'a>(
    mut base: ScrollConfig,
    attrs: &[(&'a str, Option<String>)],
) -> (ScrollConfig, Vec<&'a str>) {
    let mut rejected = Vec::new();
    for (name, raw) in attrs {
        let Some(raw) = raw.as_deref() else {
            continue;
        };
        let Some(value) = parse_f64(Some(raw)) else {
            rejected.push(*name);
            continue;
        };
        let slot = match *name {
            ATTR_SMOOTH_FACTOR => &mut base.smooth_factor,
            ATTR_MOUSE_VELOCITY => &mut base.mouse_velocity_scale,
            ATTR_TOUCH_VELOCITY => &mut base.touch_velocity_scale,
            ATTR_MOUSE_MOMENTUM => &mut base.mouse_momentum_scale,
            ATTR_TOUCH_MOMENTUM => &mut base.touch_momentum_scale,
            _ => {
                rejected.push(*name);
                continue;
            }
        };
        *slot = value;
    }
    (base, rejected)
}

/// Merge overrides and fall back to defaults if the result fails validation.
pub fn resolve_config(attrs: &[(&str, Option<String>)]) -> ScrollConfig {
    let (merged, rejected) = apply_overrides(ScrollConfig::default(), attrs);
    for name in rejected {
        log::warn!("[config] ignoring unusable {}", name);
    }
    match merged.validate() {
        Ok(()) => merged,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            ScrollConfig::default()
        }
    }
}
