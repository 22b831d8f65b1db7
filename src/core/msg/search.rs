use serde::{Deserialize, Serialize};

use crate::domain::movie::{FetchError, Movie};

/// Messages specific to SearchState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    /// The live input text after a keystroke
    InputChanged(String),
    /// Empty the input (settles like any other edit)
    Clear,
    /// The debounce timer fired with this value
    QuerySettled(String),
    /// A movie fetch finished; `request_id` identifies which one
    MoviesLoaded {
        request_id: u64,
        query: String,
        result: Result<Vec<Movie>, FetchError>,
    },
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}
