mod controls;
mod keyboard;
mod pointer;
mod scroll;

pub use controls::wire_page_controls;
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::{wire_resize, wire_scroll};
