//! UI configuration
//!
//! Key bindings and styles, both loadable from the user's config file.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
