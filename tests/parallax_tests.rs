// Host-side tests for parallax offsets, hash routes and frame smoothing.

use storefront_core::{
    default_routes, panel_for_hash, parallax_offset, parse_speed, HashRoute, ParallaxLayer,
    Smoothing,
};

#[test]
fn offset_scales_with_position_speed_and_dampening() {
    assert!((parallax_offset(1000.0, 0.5, 0.2) + 100.0).abs() < 1e-9);
    assert_eq!(parallax_offset(0.0, 3.0, 0.2), 0.0);
    assert!(parallax_offset(500.0, -1.0, 0.2) > 0.0);
}

#[test]
fn bad_speed_falls_back_to_default() {
    assert_eq!(parse_speed(None, 0.2), 0.2);
    assert_eq!(parse_speed(Some("fast"), 0.2), 0.2);
    assert_eq!(parse_speed(Some(""), 0.2), 0.2);
    assert_eq!(parse_speed(Some("NaN"), 0.2), 0.2);
    assert_eq!(parse_speed(Some("inf"), 0.2), 0.2);
    assert_eq!(parse_speed(Some(" 0.5 "), 0.2), 0.5);
    assert_eq!(parse_speed(Some("-1.25"), 0.2), -1.25);
}

#[test]
fn layer_yields_one_offset_per_element() {
    let mut layer = ParallaxLayer::default();
    assert!(layer.is_empty());
    assert_eq!(layer.register(Some("1")), 0);
    assert_eq!(layer.register(None), 1);
    assert_eq!(layer.register(Some("oops")), 2);
    assert_eq!(layer.speeds(), &[1.0, 0.2, 0.2]);

    let offsets: Vec<f64> = layer.offsets(500.0).collect();
    assert_eq!(offsets.len(), 3);
    assert!((offsets[0] + 100.0).abs() < 1e-9);
    assert!((offsets[1] + 20.0).abs() < 1e-9);
}

#[test]
fn hash_routes_match_with_or_without_hash() {
    let routes = default_routes();
    assert_eq!(panel_for_hash("#contacts", &routes), Some(5));
    assert_eq!(panel_for_hash("contacts", &routes), Some(5));
    assert_eq!(panel_for_hash("#Contacts", &routes), None);
    assert_eq!(panel_for_hash("#", &routes), None);
    assert_eq!(panel_for_hash("", &routes), None);

    let custom = vec![HashRoute::new("shop", 1), HashRoute::new("cart", 3)];
    assert_eq!(panel_for_hash("#cart", &custom), Some(3));
}

#[test]
fn smoothing_factor_compounds_over_frames() {
    let s = Smoothing::new(0.065, 60.0, 0.1);
    assert!((s.factor(1.0 / 60.0) - 0.065).abs() < 1e-12);
    let two = 1.0 - 0.935_f64.powi(2);
    assert!((s.factor(2.0 / 60.0) - two).abs() < 1e-12);
    assert_eq!(s.factor(0.0), 0.0);
    assert_eq!(s.factor(-1.0), 0.0);
    assert!((s.factor(f64::NAN) - 0.065).abs() < 1e-12);
    assert_eq!(s.factor(10.0), s.factor(0.1));
}

#[test]
fn approach_moves_toward_target() {
    let s = Smoothing::new(0.5, 60.0, 0.1);
    assert!((s.approach(0.0, 100.0, 1.0 / 60.0) - 50.0).abs() < 1e-9);
    assert!((s.approach(100.0, 0.0, 1.0 / 60.0) - 50.0).abs() < 1e-9);
}
