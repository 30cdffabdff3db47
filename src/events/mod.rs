pub mod keyboard;
pub mod navigation;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use navigation::{apply_hash, wire_hashchange, wire_nav_clicks, wire_resize};
pub use pointer::{wire_input_handlers, InputWiring};
