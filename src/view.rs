use crate::attrs::parse_index;
use crate::constants::*;
use crate::dom;
use storefront_core::{PanelChange, ParallaxLayer, ProgressFrame};
use web_sys as web;

/// Cached element handles for the panel scroller. Only the container is
/// required; every other handle is optional.
pub struct PanelView {
    pub container: web::HtmlElement,
    pub panels: Vec<web::HtmlElement>,
    pub progress_bar: Option<web::HtmlElement>,
    pub page_label: Option<web::HtmlElement>,
    /// Navigation items paired with the panel index they point at.
    pub nav_items: Vec<(usize, web::HtmlElement)>,
    pub parallax_elements: Vec<web::HtmlElement>,
}

impl PanelView {
    pub fn collect(document: &web::Document) -> anyhow::Result<Self> {
        let container = dom::html_by_id(document, PANEL_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", PANEL_CONTAINER_ID))?;
        let panels = dom::query_all(&container, PANEL_SELECTOR);

        let nav_items = match document.document_element() {
            Some(root) => dom::query_all(&root, NAV_ITEM_SELECTOR)
                .into_iter()
                .filter_map(|el| {
                    let idx = parse_index(el.get_attribute(NAV_PANEL_ATTR).as_deref())?;
                    Some((idx, el))
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            parallax_elements: dom::query_all(&container, PARALLAX_SELECTOR),
            progress_bar: dom::html_by_id(document, PROGRESS_BAR_ID),
            page_label: dom::html_by_id(document, PAGE_LABEL_ID),
            container,
            panels,
            nav_items,
        })
    }

    /// Register every parallax element's configured speed with `layer`.
    pub fn register_parallax(&self, layer: &mut ParallaxLayer) {
        for el in &self.parallax_elements {
            layer.register(el.get_attribute(PARALLAX_SPEED_ATTR).as_deref());
        }
    }

    pub fn apply_panel_width(&self, width: f64) {
        let w = format!("{}px", width);
        for panel in &self.panels {
            dom::set_style(panel, "width", &w);
        }
    }

    pub fn apply_position(&self, position: f64) {
        dom::set_style(
            &self.container,
            "transform",
            &format!("translate3d({:.2}px, 0, 0)", -position),
        );
    }

    pub fn apply_parallax(&self, offsets: impl Iterator<Item = f64>) {
        for (el, offset) in self.parallax_elements.iter().zip(offsets) {
            dom::set_style(el, "transform", &format!("translate3d({:.2}px, 0, 0)", offset));
        }
    }

    pub fn apply_progress(&self, frame: &ProgressFrame) {
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "transform", &format!("scaleX({:.4})", frame.ratio));
        }
        if let Some(label) = &self.page_label {
            label.set_text_content(Some(&frame.label));
        }
        if let Some(change) = frame.change {
            self.apply_active(change);
        }
    }

    /// Move the active class from the previous panel (and nav item) to the
    /// current one. Called once per boundary crossing.
    fn apply_active(&self, change: PanelChange) {
        match change.previous {
            Some(prev) => {
                if let Some(panel) = self.panels.get(prev) {
                    dom::set_class(panel, ACTIVE_CLASS, false);
                }
            }
            // first frame: markup may ship with a stale marker
            None => {
                for panel in &self.panels {
                    dom::set_class(panel, ACTIVE_CLASS, false);
                }
            }
        }
        if let Some(panel) = self.panels.get(change.current) {
            dom::set_class(panel, ACTIVE_CLASS, true);
        }
        for (idx, item) in &self.nav_items {
            dom::set_class(item, ACTIVE_CLASS, *idx == change.current);
        }
        log::debug!("[scroll] active panel {:?} -> {}", change.previous, change.current);
    }

    pub fn set_dragging(&self, on: bool) {
        dom::set_class(&self.container, DRAGGING_CLASS, on);
    }
}
