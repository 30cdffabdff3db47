// Host-side tests for the progress bar, page counter and active-panel marker.

use storefront_core::{format_label, PanelChange, ProgressIndicator, ScrollConfig};

const DT: f64 = 1.0 / 60.0;

fn make_indicator(panels: usize) -> ProgressIndicator {
    ProgressIndicator::new(panels, ScrollConfig::default().progress_smoothing())
}

#[test]
fn label_is_zero_padded_and_one_based() {
    assert_eq!(format_label(0, 3), "01 / 03");
    assert_eq!(format_label(9, 12), "10 / 12");
    assert_eq!(format_label(2, 3), "03 / 03");
}

#[test]
fn first_update_marks_initial_panel_active() {
    let mut p = make_indicator(3);
    let frame = p.update(0.0, 1000.0, 2000.0, DT);
    assert_eq!(
        frame.change,
        Some(PanelChange {
            previous: None,
            current: 0
        })
    );
    assert_eq!(p.active(), Some(0));
}

#[test]
fn resting_on_a_panel_never_refires() {
    let mut p = make_indicator(3);
    p.update(1000.0, 1000.0, 2000.0, DT);
    for _ in 0..100 {
        let frame = p.update(1000.0, 1000.0, 2000.0, DT);
        assert_eq!(frame.change, None);
        assert_eq!(frame.panel_index, 1);
    }
}

#[test]
fn crossing_a_boundary_fires_exactly_once() {
    let mut p = make_indicator(3);
    p.update(0.0, 1000.0, 2000.0, DT);
    let mut changes = Vec::new();
    let mut pos = 0.0;
    while pos <= 1000.0 {
        if let Some(c) = p.update(pos, 1000.0, 2000.0, DT).change {
            changes.push(c);
        }
        pos += 25.0;
    }
    assert_eq!(
        changes,
        vec![PanelChange {
            previous: Some(0),
            current: 1
        }]
    );
}

#[test]
fn panel_index_rounds_and_clamps() {
    let p = make_indicator(3);
    assert_eq!(p.panel_index(499.0, 1000.0), 0);
    assert_eq!(p.panel_index(500.0, 1000.0), 1);
    assert_eq!(p.panel_index(1600.0, 1000.0), 2);
    assert_eq!(p.panel_index(9000.0, 1000.0), 2);
    assert_eq!(p.panel_index(-300.0, 1000.0), 0);
    assert_eq!(p.panel_index(500.0, 0.0), 0);
}

#[test]
fn ratio_is_smoothed_faster_than_position() {
    let mut p = make_indicator(3);
    let frame = p.update(2000.0, 1000.0, 2000.0, DT);
    // 0.065 * 1.5 of the way on the first frame
    assert!((frame.ratio - 0.0975).abs() < 1e-9, "ratio {}", frame.ratio);
    let second = p.update(2000.0, 1000.0, 2000.0, DT);
    assert!(second.ratio > frame.ratio && second.ratio < 1.0);
}

#[test]
fn settle_snaps_ratio_to_target() {
    let mut p = make_indicator(5);
    p.update(1000.0, 1000.0, 4000.0, DT);
    p.settle(1000.0, 4000.0);
    assert_eq!(p.ratio(), 0.25);
}

#[test]
fn single_panel_has_zero_ratio() {
    let mut p = make_indicator(1);
    let frame = p.update(0.0, 1000.0, 0.0, DT);
    assert_eq!(frame.ratio, 0.0);
    assert_eq!(frame.label, "01 / 01");
}

#[test]
fn zero_panels_never_mark_anything() {
    let mut p = make_indicator(0);
    let frame = p.update(0.0, 1000.0, 0.0, DT);
    assert_eq!(frame.change, None);
    assert_eq!(p.active(), None);
}
