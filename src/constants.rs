/// DOM hooks shared by the scroller, navigation and carousel wiring.
///
/// Markup is expected to carry these ids, classes and attributes; anything
/// optional that is missing simply disables the feature that reads it.
// Panel scroller
pub const PANEL_CONTAINER_ID: &str = "panels";
pub const PANEL_SELECTOR: &str = ".panel";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const PAGE_LABEL_ID: &str = "page-counter";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_SPEED_ATTR: &str = "data-speed";

// Navigation menu
pub const NAV_ITEM_SELECTOR: &str = "[data-panel]";
pub const NAV_PANEL_ATTR: &str = "data-panel";

// Pointer-down inside any of these never starts a drag
pub const NO_DRAG_SELECTOR: &str = ".nav-menu, .copy-button, [data-no-drag], a, button, input, textarea, select";

// State classes
pub const ACTIVE_CLASS: &str = "active";
pub const DRAGGING_CLASS: &str = "is-dragging";

// Config overrides read from the panel container
pub const ATTR_SMOOTH_FACTOR: &str = "data-smooth-factor";
pub const ATTR_MOUSE_VELOCITY: &str = "data-mouse-velocity";
pub const ATTR_TOUCH_VELOCITY: &str = "data-touch-velocity";
pub const ATTR_MOUSE_MOMENTUM: &str = "data-mouse-momentum";
pub const ATTR_TOUCH_MOMENTUM: &str = "data-touch-momentum";

// Carousel strips
pub const PRODUCT_STRIP_ID: &str = "product-strip";
pub const CERTIFICATE_STRIP_ID: &str = "certificate-strip";
pub const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";
pub const CAROUSEL_ITEM_SELECTOR: &str = ".carousel-item";
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-next";
pub const CAROUSEL_DOTS_SELECTOR: &str = ".carousel-dots";
pub const CAROUSEL_DOT_CLASS: &str = "carousel-dot";

// WheelEvent.deltaMode conversions
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;
