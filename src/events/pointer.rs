use crate::constants::{NO_DRAG_SELECTOR, WHEEL_LINE_HEIGHT_PX};
use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use std::rc::Rc;
use storefront_core::PointerKind;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub frame_loop: Rc<FrameLoop>,
}

impl InputWiring {
    fn drag_kind(&self) -> Option<PointerKind> {
        let scroller = self.frame_loop.scroller().borrow();
        scroller.animator.drag_session().map(|s| s.kind)
    }

    fn start_drag(&self, ev: &web::Event, x: f64, kind: PointerKind) -> bool {
        if dom::target_within(ev, NO_DRAG_SELECTOR) {
            return false;
        }
        let mut scroller = self.frame_loop.scroller().borrow_mut();
        let opened = scroller.animator.on_drag_start(x, kind, ev.time_stamp());
        if opened {
            scroller.view.set_dragging(true);
        }
        opened
    }

    fn move_drag(&self, x: f64, time_ms: f64) {
        let wake = self
            .frame_loop
            .scroller()
            .borrow_mut()
            .animator
            .on_drag_move(x, time_ms);
        if wake {
            self.frame_loop.ensure_running();
        }
    }

    fn end_drag(&self) {
        let wake = {
            let mut scroller = self.frame_loop.scroller().borrow_mut();
            scroller.view.set_dragging(false);
            scroller.animator.on_drag_end()
        };
        if wake {
            self.frame_loop.ensure_running();
        }
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_touch(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let container = w.frame_loop.scroller().borrow().view.container.clone();
    let w = w.clone();
    dom::add_listener(&container, "pointerdown", move |ev: web::PointerEvent| {
        let Some(kind) = input::pointer_kind(&ev.pointer_type()) else {
            return;
        };
        if !input::is_primary_button(ev.button()) {
            return;
        }
        if w.start_drag(&ev, ev.client_x() as f64, kind) {
            ev.prevent_default();
        }
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.window, "pointermove", move |ev: web::PointerEvent| {
        if w2.drag_kind() != Some(PointerKind::Mouse) {
            return;
        }
        if input::pointer_kind(&ev.pointer_type()).is_none() {
            return;
        }
        w2.move_drag(ev.client_x() as f64, ev.time_stamp());
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        dom::add_listener(&w.window, event, move |ev: web::PointerEvent| {
            if w2.drag_kind() != Some(PointerKind::Mouse) {
                return;
            }
            if input::pointer_kind(&ev.pointer_type()).is_none() {
                return;
            }
            w2.end_drag();
        });
    }
}

fn first_touch_x(list: &web::TouchList) -> Option<f64> {
    list.get(0).map(|t| t.client_x() as f64)
}

fn wire_touch(w: &InputWiring) {
    let container = w.frame_loop.scroller().borrow().view.container.clone();

    let w_start = w.clone();
    dom::add_listener(&container, "touchstart", move |ev: web::TouchEvent| {
        if ev.touches().length() != 1 {
            return;
        }
        if let Some(x) = first_touch_x(&ev.touches()) {
            w_start.start_drag(&ev, x, PointerKind::Touch);
        }
    });

    let w_move = w.clone();
    dom::add_active_listener(&w.window, "touchmove", move |ev: web::TouchEvent| {
        if w_move.drag_kind() != Some(PointerKind::Touch) {
            return;
        }
        if let Some(x) = first_touch_x(&ev.touches()) {
            ev.prevent_default();
            w_move.move_drag(x, ev.time_stamp());
        }
    });

    for event in ["touchend", "touchcancel"] {
        let w_end = w.clone();
        dom::add_listener(&w.window, event, move |_: web::TouchEvent| {
            if w_end.drag_kind() == Some(PointerKind::Touch) {
                w_end.end_drag();
            }
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_active_listener(&w.window, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let wake = {
            let mut scroller = w2.frame_loop.scroller().borrow_mut();
            let page = scroller.animator.panel_width();
            let delta = input::dominant_delta(ev.delta_x(), ev.delta_y());
            let px = input::wheel_delta_px(delta, ev.delta_mode(), WHEEL_LINE_HEIGHT_PX, page);
            scroller.animator.on_wheel(px)
        };
        if wake {
            w2.frame_loop.ensure_running();
        }
    });
}
