use storefront_core::{NavCommand, PointerKind};

// ---------------- Pointer helpers ----------------

/// Map `PointerEvent.pointerType` onto a drag kind. Pens drag like a mouse;
/// touch pointers are left to the dedicated touch listeners.
#[inline]
pub fn pointer_kind(pointer_type: &str) -> Option<PointerKind> {
    match pointer_type {
        "mouse" | "pen" | "" => Some(PointerKind::Mouse),
        _ => None,
    }
}

/// Only the primary mouse button starts a drag.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

// ---------------- Wheel ----------------

/// Convert a wheel delta to pixels according to `WheelEvent.deltaMode`
/// (0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, line_height: f64, page_width: f64) -> f64 {
    match delta_mode {
        1 => delta * line_height,
        2 => delta * page_width,
        _ => delta,
    }
}

/// Horizontal trackpads report on the X axis; use whichever axis moved more.
#[inline]
pub fn dominant_delta(delta_x: f64, delta_y: f64) -> f64 {
    if delta_x.abs() > delta_y.abs() {
        delta_x
    } else {
        delta_y
    }
}

// ---------------- Keyboard ----------------

#[inline]
pub fn nav_command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowRight" | "PageDown" => Some(NavCommand::Next),
        "ArrowLeft" | "PageUp" => Some(NavCommand::Previous),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}
