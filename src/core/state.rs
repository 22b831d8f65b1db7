pub mod search;
pub mod system;
pub mod trending;

use crate::infrastructure::config::Config;

pub use search::SearchState;
pub use system::SystemState;
pub use trending::TrendingState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search: SearchState,
    pub trending: TrendingState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }
}
