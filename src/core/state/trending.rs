use crate::{
    core::{cmd::Cmd, msg::trending::TrendingMsg},
    domain::trending::TrendingEntry,
};

/// Trending searches read from the shared store
#[derive(Debug, Clone, Default)]
pub struct TrendingState {
    entries: Vec<TrendingEntry>,
}

impl TrendingState {
    pub fn entries(&self) -> &[TrendingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Failures are only logged; whatever was shown before stays.
    pub fn update(&mut self, msg: TrendingMsg) -> Vec<Cmd> {
        match msg {
            TrendingMsg::Refresh => vec![Cmd::LoadTrending],
            TrendingMsg::Loaded(entries) => {
                self.entries = entries;
                vec![]
            }
            TrendingMsg::LoadFailed(reason) => vec![Cmd::LogError {
                message: format!("Error fetching trending movies: {reason}"),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(id: &str, term: &str, count: u64) -> TrendingEntry {
        TrendingEntry {
            id: id.to_string(),
            search_term: term.to_string(),
            count,
            movie_id: None,
            poster_url: None,
        }
    }

    #[test]
    fn test_refresh_requests_load() {
        let mut trending = TrendingState::default();
        assert_eq!(trending.update(TrendingMsg::Refresh), vec![Cmd::LoadTrending]);
    }

    #[test]
    fn test_loaded_replaces_entries_in_order() {
        let mut trending = TrendingState::default();
        trending.update(TrendingMsg::Loaded(vec![entry("a", "dune", 9)]));
        let cmds = trending.update(TrendingMsg::Loaded(vec![
            entry("b", "alien", 12),
            entry("a", "dune", 10),
        ]));
        assert!(cmds.is_empty());
        let terms: Vec<_> = trending
            .entries()
            .iter()
            .map(|e| e.search_term.as_str())
            .collect();
        assert_eq!(terms, vec!["alien", "dune"]);
    }

    #[test]
    fn test_failure_is_logged_and_keeps_entries() {
        let mut trending = TrendingState::default();
        trending.update(TrendingMsg::Loaded(vec![entry("a", "dune", 9)]));

        let cmds = trending.update(TrendingMsg::LoadFailed("timeout".to_string()));

        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "Error fetching trending movies: timeout".to_string()
            }]
        );
        assert_eq!(trending.entries().len(), 1);
    }
}
