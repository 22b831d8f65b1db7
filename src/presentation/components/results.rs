//! Result list
//!
//! Exactly one of: spinner while a fetch is in flight, the error line, or
//! the movie cards. Selection comes from `SearchState`, so the list state is
//! rebuilt on every frame.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{movie_card::MovieCard, spinner::Spinner},
};

pub const EMPTY_MESSAGE: &str = "No movies found.";

#[derive(Debug, Clone, Default)]
pub struct ResultsComponent;

impl ResultsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let block = Block::default().borders(Borders::ALL).title(" All Movies ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let search = &state.search;
        if search.is_loading() {
            let spinner = Spinner::new(state.system.tick).style(styles.get_or_default("spinner"));
            frame.render_widget(spinner, inner);
        } else if let Some(error) = search.error() {
            let paragraph = Paragraph::new(Line::styled(
                error.to_string(),
                styles.get_or_default("error"),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
        } else if search.movies().is_empty() {
            let paragraph = Paragraph::new(Line::styled(
                EMPTY_MESSAGE,
                styles.get_or_default("meta"),
            ));
            frame.render_widget(paragraph, inner);
        } else {
            let width = inner.width as usize;
            let items: Vec<ListItem> = search
                .movies()
                .iter()
                .map(|movie| {
                    MovieCard::new(movie, &config.tmdb.image_base_url, styles)
                        .width(width)
                        .into()
                })
                .collect();
            let list = List::new(items).highlight_style(styles.get_or_default("highlight"));
            let mut list_state = ListState::default().with_selected(search.selected());
            frame.render_stateful_widget(list, inner, &mut list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::search::SearchMsg,
        domain::movie::{FetchError, Movie, REQUEST_FAILED_MESSAGE},
        test_helpers::{buffer_lines, sample_movies, test_state},
    };
    use color_eyre::eyre::Result;
    use ratatui::backend::TestBackend;

    fn render(state: &AppState, height: u16) -> Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(60, height))?;
        terminal.draw(|f| ResultsComponent::new().view(state, f, f.area()))?;
        Ok(buffer_lines(terminal.backend().buffer()))
    }

    fn loaded(state: &mut AppState, result: Result<Vec<Movie>, FetchError>) {
        state.search.start();
        let request_id = state.search.generation();
        state.search.update(SearchMsg::MoviesLoaded {
            request_id,
            query: String::new(),
            result,
        });
    }

    #[test]
    fn test_spinner_while_loading() -> Result<()> {
        let mut state = test_state();
        state.search.start();

        let lines = render(&state, 5)?;
        assert!(lines[1].contains("Loading..."));
        Ok(())
    }

    #[test]
    fn test_error_replaces_list() -> Result<()> {
        let mut state = test_state();
        loaded(
            &mut state,
            Err(FetchError::RequestFailed {
                reason: "boom".to_string(),
            }),
        );

        let lines = render(&state, 5)?;
        assert!(lines[1].contains(REQUEST_FAILED_MESSAGE));
        assert!(!lines.iter().any(|l| l.contains("Dune")));
        Ok(())
    }

    #[test]
    fn test_empty_result_message() -> Result<()> {
        let mut state = test_state();
        loaded(&mut state, Ok(vec![]));

        let lines = render(&state, 5)?;
        assert!(lines[1].contains(EMPTY_MESSAGE));
        Ok(())
    }

    #[test]
    fn test_movie_cards() -> Result<()> {
        let mut state = test_state();
        loaded(&mut state, Ok(sample_movies()));

        let lines = render(&state, 10)?;
        assert!(lines[1].contains("Dune"));
        assert!(lines[2].contains("★ 8.1 (12,000 votes) • en • 2021"));
        assert!(lines[3].contains("https://image.tmdb.org/t/p/w500/dune.jpg"));
        assert!(lines[5].contains("Dune (1984)"));
        assert!(lines[6].contains("★ N/A"));
        Ok(())
    }
}
