use serde::{Deserialize, Serialize};

use crate::domain::trending::TrendingEntry;

/// Messages specific to TrendingState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrendingMsg {
    Refresh,
    Loaded(Vec<TrendingEntry>),
    LoadFailed(String),
}
