use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A movie as returned by the catalog's search and discover endpoints.
///
/// Only `id` and `title` are required; every other field is optional in
/// practice (unreleased titles have no date, obscure ones no poster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            popularity: 0.0,
            vote_average: None,
            vote_count: 0,
            original_language: None,
            release_date: None,
        }
    }

    /// Rating on the catalog's 0-10 scale; a zero average means "not rated".
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|v| *v > 0.0)
    }

    /// Rating formatted with one decimal, or `N/A`.
    pub fn rating_label(&self) -> String {
        match self.rating() {
            Some(rating) => format!("{rating:.1}"),
            None => "N/A".to_string(),
        }
    }

    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    pub fn language(&self) -> Option<&str> {
        self.original_language.as_deref().filter(|l| !l.is_empty())
    }

    /// Absolute poster URL under `image_base_url` (e.g. `https://image.tmdb.org/t/p/w500`).
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base_url.trim_end_matches('/'), p))
    }
}

/// Shown when the payload has no `results` array and no message of its own.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Failed to get the list of movies.";
/// Shown for every transport, status or decoding failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Error fetching movies try again";

/// Why a movie fetch produced no list, in the two classes the UI tells apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// The response decoded but carried no `results` array.
    Malformed { message: String },
    /// Transport error, non-success status or undecodable body.
    RequestFailed { reason: String },
}

impl FetchError {
    /// Text for the error line in place of the result list.
    pub fn user_message(&self) -> &str {
        match self {
            FetchError::Malformed { message } => message,
            FetchError::RequestFailed { .. } => REQUEST_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_deserialize_minimal_record() -> serde_json::Result<()> {
        let movie: Movie = serde_json::from_str(r#"{"id": 603, "title": "The Matrix"}"#)?;
        assert_eq!(movie, Movie::new(603, "The Matrix"));
        Ok(())
    }

    #[test]
    fn test_deserialize_full_record() -> serde_json::Result<()> {
        let movie: Movie = serde_json::from_str(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "poster_path": "/matrix.jpg",
                "popularity": 85.2,
                "vote_average": 8.2,
                "vote_count": 26000,
                "original_language": "en",
                "release_date": "1999-03-31",
                "adult": false
            }"#,
        )?;
        assert_eq!(movie.poster_path.as_deref(), Some("/matrix.jpg"));
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.language(), Some("en"));
        assert_eq!(movie.rating_label(), "8.2");
        Ok(())
    }

    #[test]
    fn test_null_poster_is_accepted() -> serde_json::Result<()> {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 1, "title": "Lost", "poster_path": null}"#)?;
        assert_eq!(movie.poster_url("https://image.tmdb.org/t/p/w500"), None);
        Ok(())
    }

    #[rstest]
    #[case(None, "N/A")]
    #[case(Some(0.0), "N/A")]
    #[case(Some(7.25), "7.2")]
    #[case(Some(10.0), "10.0")]
    fn test_rating_label(#[case] vote_average: Option<f64>, #[case] expected: &str) {
        let movie = Movie {
            vote_average,
            ..Movie::new(1, "x")
        };
        assert_eq!(movie.rating_label(), expected);
    }

    #[rstest]
    #[case(Some("2024-05-01"), Some(2024))]
    #[case(Some(""), None)]
    #[case(Some("soon"), None)]
    #[case(None, None)]
    fn test_release_year(#[case] release_date: Option<&str>, #[case] expected: Option<i32>) {
        let movie = Movie {
            release_date: release_date.map(String::from),
            ..Movie::new(1, "x")
        };
        assert_eq!(movie.release_year(), expected);
    }

    #[test]
    fn test_fetch_error_user_message() {
        let malformed = FetchError::Malformed {
            message: "Invalid API key".to_string(),
        };
        let failed = FetchError::RequestFailed {
            reason: "401 Unauthorized".to_string(),
        };
        assert_eq!(malformed.user_message(), "Invalid API key");
        assert_eq!(failed.user_message(), REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn test_poster_url_joins_base() {
        let movie = Movie {
            poster_path: Some("/abc.jpg".to_string()),
            ..Movie::new(1, "x")
        };
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500/"),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string())
        );
    }
}
