// Host-side tests for pure input and attribute helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod attrs {
    include!("../src/attrs.rs");
}

use attrs::*;
use constants::*;
use input::*;
use storefront_core::{NavCommand, PointerKind, ScrollConfig};

#[test]
fn pointer_types_map_to_drag_kinds() {
    assert_eq!(pointer_kind("mouse"), Some(PointerKind::Mouse));
    assert_eq!(pointer_kind("pen"), Some(PointerKind::Mouse));
    assert_eq!(pointer_kind(""), Some(PointerKind::Mouse));
    // touch pointers are handled by the touch listeners
    assert_eq!(pointer_kind("touch"), None);
}

#[test]
fn only_primary_button_drags() {
    assert!(is_primary_button(0));
    assert!(!is_primary_button(1));
    assert!(!is_primary_button(2));
}

#[test]
fn wheel_delta_modes_convert_to_pixels() {
    assert_eq!(wheel_delta_px(120.0, 0, 16.0, 1000.0), 120.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 1000.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 1000.0), -1000.0);
}

#[test]
fn dominant_delta_prefers_larger_axis() {
    assert_eq!(dominant_delta(0.0, 40.0), 40.0);
    assert_eq!(dominant_delta(-90.0, 10.0), -90.0);
    assert_eq!(dominant_delta(5.0, -5.0), -5.0);
}

#[test]
fn navigation_keys() {
    assert_eq!(nav_command_for_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(nav_command_for_key("PageDown"), Some(NavCommand::Next));
    assert_eq!(nav_command_for_key("ArrowLeft"), Some(NavCommand::Previous));
    assert_eq!(nav_command_for_key("PageUp"), Some(NavCommand::Previous));
    assert_eq!(nav_command_for_key("Home"), Some(NavCommand::First));
    assert_eq!(nav_command_for_key("End"), Some(NavCommand::Last));
    assert_eq!(nav_command_for_key("ArrowUp"), None);
    assert_eq!(nav_command_for_key("a"), None);
}

#[test]
fn numeric_attributes_parse_strictly() {
    assert_eq!(parse_f64(Some("0.08")), Some(0.08));
    assert_eq!(parse_f64(Some("  12 ")), Some(12.0));
    assert_eq!(parse_f64(Some("")), None);
    assert_eq!(parse_f64(Some("twelve")), None);
    assert_eq!(parse_f64(Some("NaN")), None);
    assert_eq!(parse_f64(None), None);
}

#[test]
fn panel_index_attribute() {
    assert_eq!(parse_index(Some("3")), Some(3));
    assert_eq!(parse_index(Some(" 0 ")), Some(0));
    assert_eq!(parse_index(Some("-1")), None);
    assert_eq!(parse_index(None), None);
}

#[test]
fn overrides_replace_matching_fields() {
    let attrs = vec![
        (ATTR_SMOOTH_FACTOR, Some("0.1".to_string())),
        (ATTR_TOUCH_MOMENTUM, Some("4".to_string())),
        (ATTR_MOUSE_MOMENTUM, None),
        (ATTR_MOUSE_VELOCITY, Some("fast".to_string())),
    ];
    let (config, rejected) = apply_overrides(ScrollConfig::default(), &attrs);
    assert_eq!(config.smooth_factor, 0.1);
    assert_eq!(config.touch_momentum_scale, 4.0);
    assert_eq!(config.mouse_momentum_scale, 8.0);
    assert_eq!(config.mouse_velocity_scale, 15.0);
    assert_eq!(rejected, vec![ATTR_MOUSE_VELOCITY]);
}

#[test]
fn unknown_attribute_is_rejected() {
    let attrs = vec![("data-bogus", Some("1".to_string()))];
    let (config, rejected) = apply_overrides(ScrollConfig::default(), &attrs);
    assert_eq!(config, ScrollConfig::default());
    assert_eq!(rejected, vec!["data-bogus"]);
}

#[test]
fn invalid_merged_config_falls_back_to_defaults() {
    let attrs = vec![(ATTR_SMOOTH_FACTOR, Some("5".to_string()))];
    assert_eq!(resolve_config(&attrs), ScrollConfig::default());

    let attrs = vec![(ATTR_TOUCH_VELOCITY, Some("20".to_string()))];
    assert_eq!(resolve_config(&attrs).touch_velocity_scale, 20.0);
}
