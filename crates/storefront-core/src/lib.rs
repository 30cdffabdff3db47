pub mod animator;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod drag;
pub mod parallax;
pub mod progress;
pub mod routing;
pub mod smoothing;

pub use animator::*;
pub use carousel::*;
pub use config::*;
pub use drag::*;
pub use parallax::*;
pub use progress::*;
pub use routing::*;
pub use smoothing::*;
