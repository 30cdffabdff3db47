use crate::dom;
use crate::frame::FrameLoop;
use crate::input::nav_command_for_key;
use std::rc::Rc;
use web_sys as web;

const EDITABLE_SELECTOR: &str = "input, textarea, select, [contenteditable]";

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_loop: &FrameLoop) {
    if ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
        return;
    }
    if dom::target_within(ev, EDITABLE_SELECTOR) {
        return;
    }
    let Some(cmd) = nav_command_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    let wake = {
        let mut scroller = frame_loop.scroller().borrow_mut();
        if scroller.animator.is_dragging() {
            return;
        }
        scroller.animator.navigate(cmd)
    };
    log::debug!("[keys] {:?}", cmd);
    if wake {
        frame_loop.ensure_running();
    }
}

pub fn wire_global_keydown(window: &web::Window, frame_loop: Rc<FrameLoop>) {
    dom::add_listener(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &frame_loop);
    });
}
