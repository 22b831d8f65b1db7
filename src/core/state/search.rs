use crate::{
    core::{cmd::Cmd, msg::search::SearchMsg},
    domain::movie::{FetchError, Movie},
};

/// Search input, the settled query and the result list it produced.
///
/// `movies` and `error` are never both populated. Every fetch takes the next
/// value of `generation` as its request id; only the reply carrying the
/// current generation may change the list.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: String,
    settled: String,
    generation: u64,
    is_loading: bool,
    movies: Vec<Movie>,
    error: Option<String>,
    selected: Option<usize>,
    shown_query: String,
}

impl SearchState {
    /// Live text of the search field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last query that survived the quiet period
    pub fn settled(&self) -> &str {
        &self.settled
    }

    /// Query the displayed list (or error) belongs to
    pub fn shown_query(&self) -> &str {
        &self.shown_query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected.and_then(|i| self.movies.get(i))
    }

    /// First fetch, issued once at start-up for the initial (empty) query.
    pub fn start(&mut self) -> Vec<Cmd> {
        self.fetch(self.settled.clone())
    }

    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::InputChanged(text) => {
                if text == self.input {
                    return vec![];
                }
                self.input.clone_from(&text);
                vec![Cmd::ScheduleSettle { query: text }]
            }

            SearchMsg::Clear => self.update(SearchMsg::InputChanged(String::new())),

            SearchMsg::QuerySettled(query) => {
                if query != self.input {
                    log::debug!("Ignoring settle for {query:?}, input is now {:?}", self.input);
                    return vec![];
                }
                if query == self.settled {
                    return vec![];
                }
                self.settled.clone_from(&query);
                self.fetch(query)
            }

            SearchMsg::MoviesLoaded {
                request_id,
                query,
                result,
            } => self.apply_response(request_id, query, result),

            SearchMsg::ScrollUp => {
                self.selected = match self.selected {
                    Some(i) => Some(i.saturating_sub(1)),
                    None if !self.movies.is_empty() => Some(0),
                    None => None,
                };
                vec![]
            }

            SearchMsg::ScrollDown => {
                let last = self.movies.len().saturating_sub(1);
                self.selected = match self.selected {
                    Some(i) => Some((i + 1).min(last)),
                    None if !self.movies.is_empty() => Some(0),
                    None => None,
                };
                vec![]
            }

            SearchMsg::ScrollToTop => {
                self.selected = (!self.movies.is_empty()).then_some(0);
                vec![]
            }

            SearchMsg::ScrollToBottom => {
                self.selected = self.movies.len().checked_sub(1);
                vec![]
            }
        }
    }

    fn fetch(&mut self, query: String) -> Vec<Cmd> {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        vec![Cmd::FetchMovies {
            request_id: self.generation,
            query,
        }]
    }

    fn apply_response(
        &mut self,
        request_id: u64,
        query: String,
        result: Result<Vec<Movie>, FetchError>,
    ) -> Vec<Cmd> {
        if request_id != self.generation {
            log::debug!(
                "Dropping stale response #{request_id} for {query:?} (current #{})",
                self.generation
            );
            return vec![];
        }

        self.is_loading = false;
        self.shown_query.clone_from(&query);

        match result {
            Ok(movies) => {
                let first = movies.first().cloned().filter(|_| !query.is_empty());
                self.set_movies(movies);
                first
                    .map(|movie| Cmd::RecordSearch { query, movie })
                    .into_iter()
                    .collect()
            }
            Err(err) => {
                self.set_error(err.user_message());
                let message = match &err {
                    FetchError::Malformed { message } => {
                        format!("Malformed movie list for {query:?}: {message}")
                    }
                    FetchError::RequestFailed { reason } => {
                        format!("Error fetching movies : {reason}")
                    }
                };
                vec![Cmd::LogError { message }]
            }
        }
    }

    fn set_movies(&mut self, movies: Vec<Movie>) {
        self.selected = (!movies.is_empty()).then_some(0);
        self.movies = movies;
        self.error = None;
    }

    fn set_error(&mut self, message: &str) {
        self.movies.clear();
        self.selected = None;
        self.error = Some(message.to_string());
    }
}
