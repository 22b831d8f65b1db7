//! # moviescout - movie discovery in the terminal
//!
//! Search a movie catalog (TMDB) as you type, browse the results and see
//! which searches are trending across users, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (HTTP calls, timers, terminal)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! Typing never talks to the network directly: each keystroke schedules a
//! debounced "settle", and only a settled query fetches. Every fetch carries
//! a request id, and a response whose id is no longer current is dropped.
//!
//! ## Example Usage
//!
//! ```rust
//! use moviescout::core::{
//!     cmd::Cmd,
//!     msg::{search::SearchMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let (state, commands) = update(
//!     Msg::Search(SearchMsg::InputChanged("dune".to_string())),
//!     AppState::default(),
//! );
//!
//! assert_eq!(state.search.input(), "dune");
//! assert_eq!(
//!     commands,
//!     vec![Cmd::ScheduleSettle {
//!         query: "dune".to_string()
//!     }]
//! );
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
