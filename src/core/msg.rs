use serde::{Deserialize, Serialize};

pub mod search;
pub mod system;
pub mod trending;

use search::SearchMsg;
use system::SystemMsg;
use trending::TrendingMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never touch the terminal or network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Search(SearchMsg),
    Trending(TrendingMsg),
}

impl Msg {
    /// Helper to exclude frequent messages from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Search(_) | Msg::Trending(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::System(SystemMsg::Tick).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Search(SearchMsg::ScrollDown).is_frequent());
        assert!(!Msg::Trending(TrendingMsg::Refresh).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Search(SearchMsg::InputChanged("dune".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
