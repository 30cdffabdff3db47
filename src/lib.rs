#![cfg(target_arch = "wasm32")]
use crate::frame::{FrameLoop, Scroller};
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{
    default_routes, CarouselConfig, ParallaxLayer, ProgressIndicator, ScrollAnimator, ScrollConfig,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod attrs;
mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod view;

use carousel::CarouselWidget;
use constants::*;

fn read_config(container: &web::HtmlElement) -> ScrollConfig {
    let overrides: Vec<(&str, Option<String>)> = [
        ATTR_SMOOTH_FACTOR,
        ATTR_MOUSE_VELOCITY,
        ATTR_TOUCH_VELOCITY,
        ATTR_MOUSE_MOMENTUM,
        ATTR_TOUCH_MOMENTUM,
    ]
    .into_iter()
    .map(|name| (name, container.get_attribute(name)))
    .collect();
    attrs::resolve_config(&overrides)
}

fn mount_carousels(document: &web::Document, width: f64) -> Vec<Rc<RefCell<CarouselWidget>>> {
    [
        (PRODUCT_STRIP_ID, CarouselConfig::product_strip()),
        (CERTIFICATE_STRIP_ID, CarouselConfig::certificate_strip()),
    ]
    .into_iter()
    .filter_map(|(id, config)| {
        let widget = CarouselWidget::mount(document, id, config, width);
        if widget.is_none() {
            log::debug!("[carousel] #{} not on page", id);
        }
        widget
    })
    .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("storefront-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let width = dom::viewport_width();

    // Carousels are independent of the panel scroller and mount even when the
    // page has no panels.
    let carousels = mount_carousels(&document, width);

    let view = match view::PanelView::collect(&document) {
        Ok(v) => v,
        Err(e) => {
            log::info!("[scroll] disabled: {}", e);
            events::wire_resize(&window, None, carousels);
            return Ok(());
        }
    };
    let config = read_config(&view.container);
    let panel_count = view.panels.len();

    let animator = ScrollAnimator::new(panel_count, width, config.clone());
    let progress = ProgressIndicator::new(panel_count, config.progress_smoothing());
    let mut parallax =
        ParallaxLayer::new(config.parallax_dampening, config.default_parallax_speed);
    view.register_parallax(&mut parallax);
    view.apply_panel_width(animator.panel_width());
    log::info!(
        "[scroll] panels={} width={:.0} parallax={}",
        panel_count,
        animator.panel_width(),
        parallax.len()
    );

    let scroller = Rc::new(RefCell::new(Scroller::new(animator, progress, parallax, view)));
    scroller.borrow_mut().render(0.0);
    let frame_loop = FrameLoop::new(scroller);

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        frame_loop: frame_loop.clone(),
    });
    events::wire_global_keydown(&window, frame_loop.clone());
    events::wire_nav_clicks(&frame_loop);
    events::wire_resize(&window, Some(frame_loop.clone()), carousels);

    let routes = default_routes();
    events::apply_hash(&window, &routes, &frame_loop);
    events::wire_hashchange(&window, routes, frame_loop);
    Ok(())
}
