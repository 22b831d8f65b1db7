//! Status bar component
//!
//! One line at the bottom: what the result list shows, how many movies it
//! holds, and the keys for the most common actions.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::AppState, domain::text::format_count,
    presentation::config::keybindings::Action,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Describes the list currently on screen
    pub fn summary(&self, state: &AppState) -> String {
        let search = &state.search;
        let subject = match search.shown_query() {
            "" => "Popular movies".to_string(),
            query => format!("Results for \"{query}\""),
        };
        if search.is_loading() || search.error().is_some() {
            return subject;
        }
        match search.movies().len() {
            1 => format!("{subject} · 1 movie"),
            n => format!("{subject} · {} movies", format_count(n as u64)),
        }
    }

    pub fn hints(&self, state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        [
            (Action::ClearSearch, "clear"),
            (Action::RefreshTrending, "trending"),
            (Action::Quit, "quit"),
        ]
        .into_iter()
        .filter_map(|(action, label)| {
            keybindings
                .hint_for(action)
                .map(|key| format!("{key} {label}"))
        })
        .collect::<Vec<_>>()
        .join("  ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("status");
        let hints = self.hints(state);
        let layout = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.width() as u16 + 1),
        ])
        .split(area);

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(self.summary(state)).style(style), layout[0]);
        frame.render_widget(
            Paragraph::new(hints)
                .style(style)
                .alignment(Alignment::Right),
            layout[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::search::SearchMsg,
        domain::movie::Movie,
        test_helpers::{sample_movies, test_state},
    };
    use pretty_assertions::assert_eq;

    fn with_results(query: &str, movies: Vec<Movie>) -> AppState {
        let mut state = test_state();
        state
            .search
            .update(SearchMsg::InputChanged(query.to_string()));
        state.search.update(SearchMsg::QuerySettled(query.to_string()));
        if query.is_empty() {
            state.search.start();
        }
        let request_id = state.search.generation();
        state.search.update(SearchMsg::MoviesLoaded {
            request_id,
            query: query.to_string(),
            result: Ok(movies),
        });
        state
    }

    #[test]
    fn test_summary_for_popular() {
        let state = with_results("", sample_movies());
        assert_eq!(StatusBarComponent::new().summary(&state), "Popular movies · 2 movies");
    }

    #[test]
    fn test_summary_for_search() {
        let state = with_results("dune", vec![Movie::new(1, "Dune")]);
        assert_eq!(
            StatusBarComponent::new().summary(&state),
            "Results for \"dune\" · 1 movie"
        );
    }

    #[test]
    fn test_summary_while_loading() {
        let mut state = test_state();
        state.search.start();
        assert_eq!(StatusBarComponent::new().summary(&state), "Popular movies");
    }

    #[test]
    fn test_hints_use_bindings() {
        let state = test_state();
        let hints = StatusBarComponent::new().hints(&state);
        assert!(hints.contains("clear"));
        assert!(hints.contains("ctrl-t trending"));
        assert!(hints.ends_with("quit"));
    }
}
