//! In-memory services and fixtures shared by unit and integration tests.
//!
//! `FakeCatalog` answers from a table keyed by query and `FakeStore` records
//! what it was asked to store. `StubServer` is a loopback HTTP endpoint for
//! exercising the real clients without leaving the machine.

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use futures::future::BoxFuture;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::Mutex,
};

use crate::{
    core::{cmd_executor::Services, state::AppState},
    domain::{movie::Movie, trending::TrendingEntry},
    infrastructure::{
        config::Config,
        tmdb::{CatalogError, MovieCatalog},
        trending::{StoreError, TrendingStore},
    },
};

/// Minimal configuration with a dummy API key.
pub fn test_config() -> Config {
    match Config::from_json5(r#"{ tmdb: { api_key: "test-key" } }"#) {
        Ok(config) => config,
        Err(e) => panic!("test config must load: {e}"),
    }
}

pub fn test_state() -> AppState {
    AppState::new_with_config(test_config())
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            poster_path: Some("/dune.jpg".to_string()),
            popularity: 120.5,
            vote_average: Some(8.1),
            vote_count: 12000,
            original_language: Some("en".to_string()),
            release_date: Some("2021-09-15".to_string()),
            ..Movie::new(438631, "Dune")
        },
        Movie {
            vote_average: Some(0.0),
            ..Movie::new(841, "Dune (1984)")
        },
    ]
}

pub fn sample_entries() -> Vec<TrendingEntry> {
    vec![
        TrendingEntry {
            id: "a1".to_string(),
            search_term: "batman".to_string(),
            count: 42,
            movie_id: Some(268),
            poster_url: Some("https://image.tmdb.org/t/p/w500/batman.jpg".to_string()),
        },
        TrendingEntry {
            id: "b2".to_string(),
            search_term: "dune".to_string(),
            count: 7,
            movie_id: Some(438631),
            poster_url: None,
        },
    ]
}

/// Canned outcome for one query.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Movies(Vec<Movie>),
    Malformed(String),
    Status(u16),
}

impl FakeResponse {
    fn into_result(self) -> Result<Vec<Movie>, CatalogError> {
        match self {
            FakeResponse::Movies(movies) => Ok(movies),
            FakeResponse::Malformed(message) => Err(CatalogError::Malformed(message)),
            FakeResponse::Status(status) => Err(CatalogError::Status {
                status,
                reason: "Fake".to_string(),
            }),
        }
    }
}

/// Catalog answering from a table; unknown queries yield an empty list.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    responses: HashMap<String, FakeResponse>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with(mut self, query: &str, response: FakeResponse) -> Self {
        self.responses.insert(query.to_string(), response);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Queries received so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

impl MovieCatalog for FakeCatalog {
    fn fetch_movies(&self, query: String) -> BoxFuture<'_, Result<Vec<Movie>, CatalogError>> {
        Box::pin(async move {
            self.calls.lock().await.push(query.clone());
            if let Some(delay) = self.delays.get(&query) {
                tokio::time::sleep(*delay).await;
            }
            self.responses
                .get(&query)
                .cloned()
                .unwrap_or(FakeResponse::Movies(Vec::new()))
                .into_result()
        })
    }
}

#[derive(Debug, Default)]
pub struct FakeStore {
    entries: Vec<TrendingEntry>,
    fail_trending: bool,
    fail_record: bool,
    limits: Mutex<Vec<u32>>,
    records: Mutex<Vec<(String, Movie)>>,
}

impl FakeStore {
    pub fn with_entries(mut self, entries: Vec<TrendingEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn failing_trending(mut self) -> Self {
        self.fail_trending = true;
        self
    }

    pub fn failing_record(mut self) -> Self {
        self.fail_record = true;
        self
    }

    pub async fn trending_limits(&self) -> Vec<u32> {
        self.limits.lock().await.clone()
    }

    pub async fn records(&self) -> Vec<(String, Movie)> {
        self.records.lock().await.clone()
    }

    /// Polls until at least `n` searches were recorded.
    pub async fn wait_for_records(&self, n: usize) -> Vec<(String, Movie)> {
        loop {
            let records = self.records().await;
            if records.len() >= n {
                return records;
            }
            tokio::task::yield_now().await;
        }
    }
}

impl TrendingStore for FakeStore {
    fn trending(&self, limit: u32) -> BoxFuture<'_, Result<Vec<TrendingEntry>, StoreError>> {
        Box::pin(async move {
            self.limits.lock().await.push(limit);
            if self.fail_trending {
                return Err(StoreError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.entries.iter().take(limit as usize).cloned().collect())
        })
    }

    fn record_search(&self, query: String, movie: Movie) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            self.records.lock().await.push((query, movie));
            if self.fail_record {
                return Err(StoreError::Status {
                    status: 500,
                    body: "write failed".to_string(),
                });
            }
            Ok(())
        })
    }
}

/// Bundles fakes as executor services.
pub fn fake_services(catalog: Arc<FakeCatalog>, store: Option<Arc<FakeStore>>) -> Services {
    Services {
        catalog,
        store: store.map(|s| s as Arc<dyn TrendingStore>),
    }
}

/// Buffer contents as plain text, one string per row.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// One request as the stub server received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// e.g. `GET /3/search/movie?query=dune HTTP/1.1`
    pub request_line: String,
    /// Header names lowercased, in arrival order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path and query of the request line.
    pub fn target(&self) -> &str {
        self.request_line.split(' ').nth(1).unwrap_or_default()
    }

    fn parse(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw).into_owned();
        let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(n, v)| (n.trim().to_lowercase(), v.trim().to_string()))
            .collect();
        Self {
            request_line,
            headers,
            body: body.to_string(),
        }
    }
}

/// Loopback HTTP/1.1 server answering each connection with the next canned
/// `(status, body)` pair, then closing it.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, String)>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let Ok(raw) = read_request(&mut socket).await else {
                    return;
                };
                recorded.lock().await.push(RecordedRequest::parse(&raw));

                let response = format!(
                    "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    reason_phrase(status),
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Ok(Self { addr, requests })
    }

    /// Absolute URL of `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn read_request(socket: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(data);
        }
        data.extend_from_slice(&chunk[..n]);

        let Some(head_end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&data[..head_end]).to_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if data.len() >= head_end + 4 + body_len {
            return Ok(data);
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
