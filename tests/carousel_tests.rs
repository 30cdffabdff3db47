// Host-side tests for the bounded carousel strips.

use storefront_core::{Carousel, CarouselConfig, ConfigError};

#[test]
fn bounds_follow_item_and_visible_counts() {
    let c = Carousel::new(7, 3);
    assert_eq!(c.max_index(), 4);
    assert_eq!(c.page_count(), 5);
    assert!(c.prev_disabled());
    assert!(!c.next_disabled());
}

#[test]
fn next_and_prev_stop_at_bounds() {
    let mut c = Carousel::new(7, 3);
    for _ in 0..4 {
        assert!(c.next());
    }
    assert_eq!(c.index(), 4);
    assert!(c.next_disabled());
    assert!(!c.next());
    assert_eq!(c.index(), 4);

    for _ in 0..4 {
        assert!(c.prev());
    }
    assert!(!c.prev());
    assert_eq!(c.index(), 0);
}

#[test]
fn dot_navigation_clamps() {
    let mut c = Carousel::new(7, 3);
    assert!(c.go_to(2));
    assert_eq!(c.active_dot(), 2);
    assert!(c.go_to(40));
    assert_eq!(c.index(), 4);
    assert!(!c.go_to(4));
}

#[test]
fn offset_is_percentage_of_item_width() {
    let mut c = Carousel::new(9, 3);
    c.go_to(3);
    assert!((c.offset_percent() + 100.0).abs() < 1e-9);
    let mut one = Carousel::new(4, 1);
    one.go_to(2);
    assert!((one.offset_percent() + 200.0).abs() < 1e-9);
}

#[test]
fn fewer_items_than_visible_disables_both_buttons() {
    let c = Carousel::new(2, 3);
    assert_eq!(c.max_index(), 0);
    assert_eq!(c.page_count(), 1);
    assert!(c.prev_disabled());
    assert!(c.next_disabled());
}

#[test]
fn resize_recomputes_visible_and_clamps_index() {
    let config = CarouselConfig::product_strip();
    let mut c = Carousel::with_viewport(6, 400.0, &config);
    assert_eq!(c.visible_count(), 1);
    c.go_to(5);
    assert_eq!(c.index(), 5);

    c.on_resize(1400.0, &config);
    assert_eq!(c.visible_count(), 3);
    assert_eq!(c.index(), 3);
    assert!(c.next_disabled());

    c.on_resize(800.0, &config);
    assert_eq!(c.visible_count(), 2);
    assert_eq!(c.index(), 3);
}

#[test]
fn breakpoints_pick_highest_matching_width() {
    let config = CarouselConfig::product_strip();
    assert_eq!(config.visible_for(320.0), 1);
    assert_eq!(config.visible_for(768.0), 2);
    assert_eq!(config.visible_for(1199.0), 2);
    assert_eq!(config.visible_for(1200.0), 3);

    let certs = CarouselConfig::certificate_strip();
    assert_eq!(certs.visible_for(1024.0), 4);
}

#[test]
fn width_below_first_breakpoint_uses_first_entry() {
    let config = CarouselConfig::new(&[(500.0, 2), (900.0, 3)]);
    assert_eq!(config.visible_for(100.0), 2);
}

#[test]
fn invalid_breakpoints_are_rejected() {
    assert_eq!(CarouselConfig::new(&[]).validate(), Err(ConfigError::Breakpoints));
    assert_eq!(
        CarouselConfig::new(&[(800.0, 2), (400.0, 1)]).validate(),
        Err(ConfigError::Breakpoints)
    );
    assert_eq!(
        CarouselConfig::new(&[(0.0, 1), (600.0, 0)]).validate(),
        Err(ConfigError::ZeroVisible(600.0))
    );
    assert!(CarouselConfig::product_strip().validate().is_ok());
    assert!(CarouselConfig::certificate_strip().validate().is_ok());
}
