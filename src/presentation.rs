//! Presentation layer
//!
//! Rendering only: components read `AppState`, widgets draw pieces of it,
//! and `config` holds the user-tunable key bindings and styles.

pub mod components;
pub mod config;
pub mod widgets;
