use crate::view::PanelView;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use storefront_core::{ParallaxLayer, ProgressIndicator, ScrollAnimator};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches.
pub struct Scroller {
    pub animator: ScrollAnimator,
    pub progress: ProgressIndicator,
    pub parallax: ParallaxLayer,
    pub view: PanelView,
    last_frame_ms: Option<f64>,
}

impl Scroller {
    pub fn new(
        animator: ScrollAnimator,
        progress: ProgressIndicator,
        parallax: ParallaxLayer,
        view: PanelView,
    ) -> Self {
        Self {
            animator,
            progress,
            parallax,
            view,
            last_frame_ms: None,
        }
    }

    /// One animation frame. Returns whether another should be scheduled.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        let dt_sec = match self.last_frame_ms {
            Some(prev) => (timestamp_ms - prev) / 1000.0,
            None => self.animator.config().position_smoothing().reference_dt(),
        };
        let more = self.animator.step(timestamp_ms);
        if more {
            self.last_frame_ms = Some(timestamp_ms);
        } else {
            self.last_frame_ms = None;
            self.progress
                .settle(self.animator.current(), self.animator.max_scroll());
        }
        self.render(dt_sec);
        more
    }

    /// Push the current state to the DOM without advancing the animation.
    pub fn render(&mut self, dt_sec: f64) {
        let state = self.animator.state();
        self.view.apply_position(state.current);
        self.view.apply_parallax(self.parallax.offsets(state.current));
        let progress = self
            .progress
            .update(state.current, state.panel_width, state.max_scroll, dt_sec);
        self.view.apply_progress(&progress);
    }

    /// Re-measure for a new viewport and redraw immediately.
    pub fn resize(&mut self, viewport_width: f64) {
        self.animator.on_resize(viewport_width);
        self.last_frame_ms = None;
        self.view.apply_panel_width(self.animator.panel_width());
        self.view.set_dragging(false);
        self.progress
            .settle(self.animator.current(), self.animator.max_scroll());
        self.render(0.0);
    }
}

/// `requestAnimationFrame` loop that stops itself when the scroller settles
/// and is restarted lazily by input.
pub struct FrameLoop {
    scroller: Rc<RefCell<Scroller>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    running: Cell<bool>,
}

impl FrameLoop {
    pub fn new(scroller: Rc<RefCell<Scroller>>) -> Rc<Self> {
        let frame_loop = Rc::new(Self {
            scroller,
            tick: RefCell::new(None),
            running: Cell::new(false),
        });
        let weak = Rc::downgrade(&frame_loop);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let more = this.scroller.borrow_mut().frame(timestamp_ms);
            if more {
                this.request();
            } else {
                this.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *frame_loop.tick.borrow_mut() = Some(closure);
        frame_loop
    }

    pub fn scroller(&self) -> &Rc<RefCell<Scroller>> {
        &self.scroller
    }

    pub fn ensure_running(&self) {
        if !self.running.replace(true) {
            self.request();
        }
    }

    fn request(&self) {
        let tick = self.tick.borrow();
        let (Some(window), Some(cb)) = (web::window(), tick.as_ref()) else {
            self.running.set(false);
            return;
        };
        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("[scroll] requestAnimationFrame failed");
            self.running.set(false);
        }
    }
}
