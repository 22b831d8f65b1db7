//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - `runtime`: owns the state and runs update cycles
//! - `app_runner`: terminal event loop and rendering

pub mod app_runner;
pub mod runtime;
