//! Movie catalog client
//!
//! `MovieCatalog` is what the command executor talks to; `TmdbClient` is the
//! HTTP implementation. The JSON payload is validated here so nothing past
//! this module sees untyped data.

use std::time::Duration;

use futures::future::BoxFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use serde_json::Value;
use thiserror::Error;

use crate::{
    domain::movie::{FetchError, Movie, MALFORMED_RESPONSE_MESSAGE},
    infrastructure::config::{ApiKey, TmdbConfig},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Characters left alone by JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no TMDB API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog responded with {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("undecodable response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response body is null")]
    NullBody,
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<CatalogError> for FetchError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Malformed(message) => FetchError::Malformed { message },
            other => FetchError::RequestFailed {
                reason: other.to_string(),
            },
        }
    }
}

pub trait MovieCatalog: Send + Sync {
    /// Search for `query`, or list popular movies when `query` is empty.
    fn fetch_movies(&self, query: String) -> BoxFuture<'_, Result<Vec<Movie>, CatalogError>>;
}

pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/search/movie?query={}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

pub fn discover_url(base_url: &str) -> String {
    format!(
        "{}/discover/movie?sort_by=popularity.desc",
        base_url.trim_end_matches('/')
    )
}

/// Search endpoint for a non-empty query, discover endpoint otherwise.
pub fn endpoint_for(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        discover_url(base_url)
    } else {
        search_url(base_url, query)
    }
}

/// Validate a response body and extract its movies.
///
/// A body without a `results` array is `Malformed`, carrying the payload's
/// own `Error` text when it has one. A `null` body has no fields to look at
/// and counts as a failed request.
pub fn parse_movie_page(body: &str) -> Result<Vec<Movie>, CatalogError> {
    let page: Value = serde_json::from_str(body)?;
    if page.is_null() {
        return Err(CatalogError::NullBody);
    }
    match page.get("results") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::Decode),
        _ => {
            let message = page
                .get("Error")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(MALFORMED_RESPONSE_MESSAGE);
            Err(CatalogError::Malformed(message.to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, CatalogError> {
        let api_key = config.api_key.clone().ok_or(CatalogError::MissingApiKey)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    pub async fn get_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let url = endpoint_for(&self.base_url, query);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(self.api_key.expose())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        parse_movie_page(&body)
    }
}

impl MovieCatalog for TmdbClient {
    fn fetch_movies(&self, query: String) -> BoxFuture<'_, Result<Vec<Movie>, CatalogError>> {
        Box::pin(async move { self.get_movies(&query).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::movie::REQUEST_FAILED_MESSAGE, test_helpers::StubServer};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const BASE: &str = "https://api.themoviedb.org/3";

    #[rstest]
    #[case("batman", "https://api.themoviedb.org/3/search/movie?query=batman")]
    #[case("the matrix", "https://api.themoviedb.org/3/search/movie?query=the%20matrix")]
    #[case("tom & jerry", "https://api.themoviedb.org/3/search/movie?query=tom%20%26%20jerry")]
    #[case("a+b=c?", "https://api.themoviedb.org/3/search/movie?query=a%2Bb%3Dc%3F")]
    #[case("wall-e (2008)!", "https://api.themoviedb.org/3/search/movie?query=wall-e%20(2008)!")]
    #[case("amélie", "https://api.themoviedb.org/3/search/movie?query=am%C3%A9lie")]
    #[case(" ", "https://api.themoviedb.org/3/search/movie?query=%20")]
    fn test_endpoint_for_search(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(endpoint_for(BASE, query), expected);
    }

    #[test]
    fn test_endpoint_for_empty_query_is_discover() {
        assert_eq!(
            endpoint_for(BASE, ""),
            "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        assert_eq!(
            search_url("http://localhost:8080/3/", "x"),
            "http://localhost:8080/3/search/movie?query=x"
        );
    }

    #[test]
    fn test_parse_results() -> Result<(), CatalogError> {
        let movies = parse_movie_page(
            r#"{"page": 1, "results": [
                {"id": 1, "title": "One", "vote_average": 6.5},
                {"id": 2, "title": "Two"}
            ], "total_pages": 1}"#,
        )?;
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "One");
        assert_eq!(movies[1], Movie::new(2, "Two"));
        Ok(())
    }

    #[test]
    fn test_parse_empty_results() -> Result<(), CatalogError> {
        assert!(parse_movie_page(r#"{"results": []}"#)?.is_empty());
        Ok(())
    }

    #[rstest]
    #[case(r#"{"status_message": "nope"}"#, MALFORMED_RESPONSE_MESSAGE)]
    #[case(r#"{"results": null}"#, MALFORMED_RESPONSE_MESSAGE)]
    #[case(r#"{"results": {"id": 1}}"#, MALFORMED_RESPONSE_MESSAGE)]
    #[case(r#"{"results": "none", "Error": "Movie not found!"}"#, "Movie not found!")]
    #[case(r#"{"Error": ""}"#, MALFORMED_RESPONSE_MESSAGE)]
    #[case(r#"[1, 2, 3]"#, MALFORMED_RESPONSE_MESSAGE)]
    fn test_parse_malformed(#[case] body: &str, #[case] expected: &str) {
        match parse_movie_page(body) {
            Err(CatalogError::Malformed(message)) => assert_eq!(message, expected),
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"results": [{"title": "no id"}]}"#)]
    fn test_parse_decode_failure(#[case] body: &str) {
        let err = parse_movie_page(body).expect_err("should not decode");
        assert!(matches!(err, CatalogError::Decode(_)));
        assert!(matches!(
            FetchError::from(err),
            FetchError::RequestFailed { .. }
        ));
    }

    #[rstest]
    #[case("not json")]
    #[case("null")]
    #[case(r#"{"results": [{"title": "no id"}]}"#)]
    fn test_unreadable_body_shows_request_failed(#[case] body: &str) {
        let err = parse_movie_page(body).expect_err("should fail");
        assert_eq!(FetchError::from(err).user_message(), REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn test_malformed_maps_to_fetch_error() {
        let err = CatalogError::Malformed("Invalid".to_string());
        assert_eq!(
            FetchError::from(err),
            FetchError::Malformed {
                message: "Invalid".to_string()
            }
        );
    }

    #[test]
    fn test_status_maps_to_request_failed() {
        let err = CatalogError::Status {
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(
            FetchError::from(err),
            FetchError::RequestFailed {
                reason: "catalog responded with 401 Unauthorized".to_string()
            }
        );
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = TmdbConfig::default();
        assert!(matches!(
            TmdbClient::new(&config),
            Err(CatalogError::MissingApiKey)
        ));
    }

    fn stub_config(server: &StubServer) -> TmdbConfig {
        TmdbConfig {
            base_url: server.url("/3"),
            api_key: Some(ApiKey::new("test-key")),
            ..TmdbConfig::default()
        }
    }

    #[tokio::test]
    async fn test_search_request_line_and_headers() -> color_eyre::Result<()> {
        let server = StubServer::start(vec![(
            200,
            r#"{"page": 1, "results": [{"id": 603, "title": "The Matrix"}]}"#.to_string(),
        )])
        .await?;
        let client = TmdbClient::new(&stub_config(&server))?;

        let movies = client.get_movies("the matrix").await?;
        assert_eq!(movies, vec![Movie::new(603, "The Matrix")]);

        let requests = server.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].request_line,
            "GET /3/search/movie?query=the%20matrix HTTP/1.1"
        );
        assert_eq!(requests[0].header("authorization"), Some("Bearer test-key"));
        assert_eq!(requests[0].header("accept"), Some("application/json"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_query_requests_discover() -> color_eyre::Result<()> {
        let server = StubServer::start(vec![(200, r#"{"results": []}"#.to_string())]).await?;
        let client = TmdbClient::new(&stub_config(&server))?;

        assert!(client.get_movies("").await?.is_empty());
        assert_eq!(
            server.requests().await[0].target(),
            "/3/discover/movie?sort_by=popularity.desc"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_unauthorized_is_a_request_failure() -> color_eyre::Result<()> {
        let server = StubServer::start(vec![(
            401,
            r#"{"status_code": 7, "status_message": "Invalid API key"}"#.to_string(),
        )])
        .await?;
        let client = TmdbClient::new(&stub_config(&server))?;

        let err = client.get_movies("dune").await.expect_err("401 must fail");
        assert!(matches!(err, CatalogError::Status { status: 401, .. }));
        assert_eq!(FetchError::from(err).user_message(), REQUEST_FAILED_MESSAGE);
        Ok(())
    }

    #[tokio::test]
    async fn test_ok_without_results_is_malformed() -> color_eyre::Result<()> {
        let server = StubServer::start(vec![
            (200, r#"{"Error": "Movie not found!"}"#.to_string()),
            (200, r#"{"page": 1}"#.to_string()),
        ])
        .await?;
        let client = TmdbClient::new(&stub_config(&server))?;

        let with_message = client.get_movies("zzz").await.expect_err("no results array");
        assert_eq!(
            FetchError::from(with_message),
            FetchError::Malformed {
                message: "Movie not found!".to_string()
            }
        );
        let without_message = client.get_movies("zzz").await.expect_err("no results array");
        assert_eq!(
            FetchError::from(without_message).user_message(),
            MALFORMED_RESPONSE_MESSAGE
        );
        Ok(())
    }
}
