//! Search field
//!
//! Controlled input: shows whatever `SearchState::input` holds. Editing is
//! done by the translator, never here.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{core::state::AppState, domain::text::truncate_to_width};

pub const PLACEHOLDER: &str = "Search through thousands of movies";

#[derive(Debug, Clone, Default)]
pub struct SearchInputComponent;

impl SearchInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default().borders(Borders::ALL).title(" Search ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let input = state.search.input();
        // Keep the end of the query visible, that is where the cursor is
        let visible = tail_to_width(input, inner.width.saturating_sub(1) as usize);
        let line = if input.is_empty() {
            Line::styled(PLACEHOLDER, styles.get_or_default("placeholder"))
        } else {
            Line::raw(visible.clone())
        };
        frame.render_widget(Paragraph::new(line), inner);

        let x = inner.x + (visible.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// Last characters of `s` fitting in `width` columns.
fn tail_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let reversed: String = s.chars().rev().collect();
    truncate_to_width(&reversed, width)
        .trim_end_matches('…')
        .chars()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::msg::search::SearchMsg, test_helpers::test_state};
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn render(state: &AppState, width: u16) -> Result<(String, Position)> {
        let mut terminal = Terminal::new(TestBackend::new(width, 3))?;
        terminal.draw(|f| SearchInputComponent::new().view(state, f, f.area()))?;
        let buffer = terminal.backend().buffer();
        let line: String = (0..width).map(|x| buffer[(x, 1)].symbol()).collect();
        let position = terminal.get_cursor_position()?;
        Ok((line, position))
    }

    #[test]
    fn test_placeholder_when_empty() -> Result<()> {
        let state = test_state();
        let (line, cursor) = render(&state, 40)?;
        assert!(line.contains(PLACEHOLDER));
        assert_eq!(cursor, Position::new(1, 1));
        Ok(())
    }

    #[test]
    fn test_shows_input_with_cursor_after_it() -> Result<()> {
        let mut state = test_state();
        state
            .search
            .update(SearchMsg::InputChanged("dune".to_string()));

        let (line, cursor) = render(&state, 20)?;
        assert_eq!(line, "│dune              │");
        assert_eq!(cursor, Position::new(5, 1));
        Ok(())
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("dune", 10), "dune");
        assert_eq!(tail_to_width("the matrix", 6), "atrix");
    }
}
