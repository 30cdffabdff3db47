// Tuning defaults for panel scrolling. `ScrollConfig::default()` is built from these.

// Smoothing
pub const SMOOTH_FACTOR: f64 = 0.065; // lerp amount per reference frame
pub const REFERENCE_FPS: f64 = 60.0;
pub const PROGRESS_SMOOTH_MULTIPLIER: f64 = 1.5; // progress bar eases faster than position
pub const MAX_FRAME_DELTA_SEC: f64 = 0.1; // cap after a backgrounded tab resumes
pub const SETTLE_TOLERANCE_PX: f64 = 0.1;

// Drag velocity, in px/ms scaled per pointer kind
pub const MOUSE_VELOCITY_SCALE: f64 = 15.0;
pub const TOUCH_VELOCITY_SCALE: f64 = 12.0;

// Momentum applied on release
pub const MOUSE_MOMENTUM_SCALE: f64 = 8.0;
pub const TOUCH_MOMENTUM_SCALE: f64 = 6.0;
pub const MOMENTUM_VELOCITY_THRESHOLD: f64 = 0.5;

// Parallax
pub const PARALLAX_DAMPENING: f64 = 0.2;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.2;

// Carousel breakpoints: (min viewport width px, visible items)
pub const PRODUCT_STRIP_BREAKPOINTS: [(f64, usize); 3] = [(0.0, 1), (768.0, 2), (1200.0, 3)];
pub const CERTIFICATE_STRIP_BREAKPOINTS: [(f64, usize); 3] = [(0.0, 1), (640.0, 2), (1024.0, 4)];

// Hash anchor that jumps straight to the contacts panel at load
pub const CONTACTS_ANCHOR: &str = "contacts";
pub const CONTACTS_PANEL: usize = 5;
