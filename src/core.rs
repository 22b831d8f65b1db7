//! Core Elm Architecture implementation
//!
//! - Messages and raw messages
//! - Application state
//! - Pure update logic and the commands it emits
//! - Command execution
//! - Raw event translation

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
