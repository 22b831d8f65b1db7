use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Key(KeyEvent),
    Paste(String),
    Error(String),
}

impl RawMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
