use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// Terminal sub-commands executed by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Side effects requested by the update function and carried out by `CmdExecutor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// (Re)start the debounce timer for the live query
    ScheduleSettle { query: String },
    /// Fetch the movie list for a settled query; the reply carries `request_id`
    FetchMovies { request_id: u64, query: String },
    /// Bump the usage count of `query`; outcome is never reported back
    RecordSearch { query: String, movie: Movie },
    /// Read the trending list from the shared store
    LoadTrending,

    Tui(TuiCommand),

    LogError { message: String },
}
