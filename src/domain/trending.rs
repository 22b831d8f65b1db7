use serde::{Deserialize, Serialize};

/// One row of the shared search-count collection.
///
/// Field names follow the stored document layout, which other clients of
/// the same collection also write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: Option<u64>,
    #[serde(default)]
    pub poster_url: Option<String>,
}
