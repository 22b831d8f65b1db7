//! Reusable widgets
//!
//! Stateless building blocks rendered by the components.

pub mod movie_card;
pub mod spinner;
