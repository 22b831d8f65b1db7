//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and layered configuration
//! - Movie catalog and trending store clients
//! - Debounce timer
pub mod cli;
pub mod config;
pub mod debouncer;
pub mod tmdb;
pub mod trending;
pub mod tui;
