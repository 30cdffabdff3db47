use crate::constants::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{Carousel, CarouselConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM binding for one bounded carousel strip.
pub struct CarouselWidget {
    name: &'static str,
    track: web::HtmlElement,
    prev: Option<web::HtmlElement>,
    next: Option<web::HtmlElement>,
    dots_container: Option<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
    carousel: Carousel,
    config: CarouselConfig,
}

impl CarouselWidget {
    /// Mount the strip with id `root_id`. Returns `None` when the strip is not
    /// on the page or has no track.
    pub fn mount(
        document: &web::Document,
        root_id: &'static str,
        config: CarouselConfig,
        viewport_width: f64,
    ) -> Option<Rc<RefCell<Self>>> {
        let root = document.get_element_by_id(root_id)?;
        let track = dom::query_one(&root, CAROUSEL_TRACK_SELECTOR)?;
        let item_count = dom::query_all(&track, CAROUSEL_ITEM_SELECTOR).len();
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[carousel] {}: {}; using product defaults", root_id, e);
                CarouselConfig::default()
            }
        };
        let carousel = Carousel::with_viewport(item_count, viewport_width, &config);
        log::info!(
            "[carousel] {} items={} visible={}",
            root_id,
            item_count,
            carousel.visible_count()
        );

        let widget = Rc::new(RefCell::new(Self {
            name: root_id,
            prev: dom::query_one(&root, CAROUSEL_PREV_SELECTOR),
            next: dom::query_one(&root, CAROUSEL_NEXT_SELECTOR),
            dots_container: dom::query_one(&root, CAROUSEL_DOTS_SELECTOR),
            track,
            dots: Vec::new(),
            carousel,
            config,
        }));
        wire_buttons(&widget);
        {
            let mut w = widget.borrow_mut();
            w.rebuild_dots(&widget, document);
            w.render();
        }
        Some(widget)
    }

    fn rebuild_dots(&mut self, this: &Rc<RefCell<Self>>, document: &web::Document) {
        let Some(container) = &self.dots_container else {
            return;
        };
        container.set_inner_html("");
        self.dots.clear();
        for page in 0..self.carousel.page_count() {
            let Some(dot) = document
                .create_element("button")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            _ = dot.set_attribute("type", "button");
            _ = dot.set_attribute("aria-label", &format!("Go to slide {}", page + 1));
            dot.set_class_name(CAROUSEL_DOT_CLASS);
            let weak = Rc::downgrade(this);
            dom::add_click_listener(&dot, move || {
                if let Some(w) = weak.upgrade() {
                    let mut w = w.borrow_mut();
                    if w.carousel.go_to(page) {
                        w.render();
                    }
                }
            });
            _ = container.append_child(&dot);
            self.dots.push(dot);
        }
    }

    pub fn render(&self) {
        dom::set_style(
            &self.track,
            "transform",
            &format!("translate3d({:.4}%, 0, 0)", self.carousel.offset_percent()),
        );
        set_disabled(self.prev.as_ref(), self.carousel.prev_disabled());
        set_disabled(self.next.as_ref(), self.carousel.next_disabled());
        let active = self.carousel.active_dot();
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, i == active);
        }
    }

    pub fn step(&mut self, forward: bool) {
        let moved = if forward {
            self.carousel.next()
        } else {
            self.carousel.prev()
        };
        if moved {
            log::debug!("[carousel] {} -> {}", self.name, self.carousel.index());
            self.render();
        }
    }

    /// Recompute the visible count for a new viewport, regenerating the dots
    /// when the number of reachable pages changed.
    pub fn resize(this: &Rc<RefCell<Self>>, viewport_width: f64) {
        let mut w = this.borrow_mut();
        let pages = w.carousel.page_count();
        let config = w.config.clone();
        w.carousel.on_resize(viewport_width, &config);
        if w.carousel.page_count() != pages {
            if let Some(document) = dom::window_document() {
                w.rebuild_dots(this, &document);
            }
        }
        w.render();
    }
}

fn set_disabled(el: Option<&web::HtmlElement>, disabled: bool) {
    let Some(el) = el else {
        return;
    };
    if disabled {
        _ = el.set_attribute("disabled", "");
        _ = el.set_attribute("aria-disabled", "true");
    } else {
        _ = el.remove_attribute("disabled");
        _ = el.remove_attribute("aria-disabled");
    }
}

fn wire_buttons(widget: &Rc<RefCell<CarouselWidget>>) {
    let w = widget.borrow();
    for (button, forward) in [(w.prev.clone(), false), (w.next.clone(), true)] {
        let Some(button) = button else {
            continue;
        };
        let weak = Rc::downgrade(widget);
        dom::add_click_listener(&button, move || {
            if let Some(w) = weak.upgrade() {
                w.borrow_mut().step(forward);
            }
        });
    }
}
