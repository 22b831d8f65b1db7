//! Domain layer
//!
//! Typed records for everything that crosses the network boundary, plus
//! text helpers shared by the widgets.

pub mod movie;
pub mod text;
pub mod trending;
