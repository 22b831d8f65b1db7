//! Shared search-count store
//!
//! Backed by an Appwrite document collection. Each document counts how
//! often one search term was searched and remembers the first movie it
//! returned. The UI only reads the top entries; the executor bumps counts
//! after successful searches without waiting for the outcome.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::{
    domain::{movie::Movie, trending::TrendingEntry},
    infrastructure::config::{ApiKey, TrendingConfig},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const SEARCH_TERM: &str = "searchTerm";
const COUNT: &str = "count";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("trending store is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("store responded with {status}: {body}")]
    Status { status: u16, body: String },
}

pub trait TrendingStore: Send + Sync {
    /// Most searched terms first, at most `limit` of them.
    fn trending(&self, limit: u32) -> BoxFuture<'_, Result<Vec<TrendingEntry>, StoreError>>;

    /// Count one more search for `query`, remembering `movie` for a new term.
    fn record_search(&self, query: String, movie: Movie) -> BoxFuture<'_, Result<(), StoreError>>;
}

/// Query expressions in the JSON form the document API accepts.
pub mod query {
    use serde_json::json;

    pub fn equal(attribute: &str, value: &str) -> String {
        json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
    }

    pub fn order_desc(attribute: &str) -> String {
        json!({ "method": "orderDesc", "attribute": attribute }).to_string()
    }

    pub fn limit(n: u32) -> String {
        json!({ "method": "limit", "values": [n] }).to_string()
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingEntry>,
}

#[derive(Debug, Clone)]
pub struct AppwriteStore {
    http: reqwest::Client,
    documents_url: String,
    project_id: String,
    api_key: Option<ApiKey>,
    image_base_url: String,
}

impl AppwriteStore {
    pub fn new(config: &TrendingConfig, image_base_url: &str) -> Result<Self, StoreError> {
        let (Some(endpoint), Some(project_id), Some(database_id), Some(collection_id)) = (
            non_empty(&config.endpoint),
            non_empty(&config.project_id),
            non_empty(&config.database_id),
            non_empty(&config.collection_id),
        ) else {
            return Err(StoreError::NotConfigured);
        };

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            documents_url: documents_url(endpoint, database_id, collection_id),
            project_id: project_id.to_string(),
            api_key: config.api_key.clone(),
            image_base_url: image_base_url.to_string(),
        })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id);
        match &self.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key.expose()),
            None => builder,
        }
    }

    async fn list(&self, queries: &[String]) -> Result<Vec<TrendingEntry>, StoreError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let response = self
            .request(Method::GET, &self.documents_url)
            .query(&params)
            .send()
            .await?;
        let list: DocumentList = ensure_success(response).await?.json().await?;
        Ok(list.documents)
    }

    pub async fn top_searches(&self, limit: u32) -> Result<Vec<TrendingEntry>, StoreError> {
        self.list(&[query::order_desc(COUNT), query::limit(limit)])
            .await
    }

    pub async fn increment_search(&self, query: &str, movie: &Movie) -> Result<(), StoreError> {
        let existing = self.list(&[query::equal(SEARCH_TERM, query)]).await?;

        let response = match existing.into_iter().next() {
            Some(entry) => {
                log::debug!("Bumping search count of {query:?} to {}", entry.count + 1);
                self.request(Method::PATCH, &format!("{}/{}", self.documents_url, entry.id))
                    .json(&json!({ "data": { COUNT: entry.count + 1 } }))
                    .send()
                    .await?
            }
            None => {
                log::debug!("First search for {query:?}, creating document");
                self.request(Method::POST, &self.documents_url)
                    .json(&new_document(query, movie, &self.image_base_url))
                    .send()
                    .await?
            }
        };
        ensure_success(response).await?;
        Ok(())
    }
}

impl TrendingStore for AppwriteStore {
    fn trending(&self, limit: u32) -> BoxFuture<'_, Result<Vec<TrendingEntry>, StoreError>> {
        Box::pin(self.top_searches(limit))
    }

    fn record_search(&self, query: String, movie: Movie) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move { self.increment_search(&query, &movie).await })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn documents_url(endpoint: &str, database_id: &str, collection_id: &str) -> String {
    format!(
        "{}/databases/{database_id}/collections/{collection_id}/documents",
        endpoint.trim_end_matches('/')
    )
}

/// Body for a term searched for the first time.
pub fn new_document(query: &str, movie: &Movie, image_base_url: &str) -> serde_json::Value {
    json!({
        "documentId": "unique()",
        "data": {
            SEARCH_TERM: query,
            COUNT: 1,
            "movie_id": movie.id,
            "poster_url": movie.poster_url(image_base_url),
        }
    })
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}
