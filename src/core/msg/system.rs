use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    /// Advances animations such as the loading spinner
    Tick,
    /// Terminal backend reported an error
    TerminalError(String),
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick)
    }
}
