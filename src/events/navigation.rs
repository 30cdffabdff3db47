use crate::carousel::CarouselWidget;
use crate::dom;
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{panel_for_hash, HashRoute};
use web_sys as web;

/// Jump to the panel named by the current URL fragment, if any.
pub fn apply_hash(window: &web::Window, routes: &[HashRoute], frame_loop: &FrameLoop) {
    let Ok(hash) = window.location().hash() else {
        return;
    };
    let Some(panel) = panel_for_hash(&hash, routes) else {
        return;
    };
    log::info!("[nav] {} -> panel {}", hash, panel);
    let wake = frame_loop.scroller().borrow_mut().animator.set_target(panel);
    if wake {
        frame_loop.ensure_running();
    }
}

pub fn wire_nav_clicks(frame_loop: &Rc<FrameLoop>) {
    let items: Vec<(usize, web::HtmlElement)> =
        frame_loop.scroller().borrow().view.nav_items.clone();
    for (panel, item) in items {
        let frame_loop = frame_loop.clone();
        dom::add_listener(&item, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let wake = frame_loop.scroller().borrow_mut().animator.set_target(panel);
            log::debug!("[nav] click -> panel {}", panel);
            if wake {
                frame_loop.ensure_running();
            }
        });
    }
}

pub fn wire_hashchange(window: &web::Window, routes: Vec<HashRoute>, frame_loop: Rc<FrameLoop>) {
    let window2 = window.clone();
    dom::add_listener(window, "hashchange", move |_: web::Event| {
        apply_hash(&window2, &routes, &frame_loop);
    });
}

pub fn wire_resize(
    window: &web::Window,
    frame_loop: Option<Rc<FrameLoop>>,
    carousels: Vec<Rc<RefCell<CarouselWidget>>>,
) {
    dom::add_listener(window, "resize", move |_: web::Event| {
        let width = dom::viewport_width();
        if let Some(frame_loop) = &frame_loop {
            frame_loop.scroller().borrow_mut().resize(width);
        }
        for carousel in &carousels {
            CarouselWidget::resize(carousel, width);
        }
    });
}
