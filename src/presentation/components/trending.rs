use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::text::format_count};

/// Most searched terms, ranked. Draws nothing while the list is empty.
#[derive(Debug, Clone, Default)]
pub struct TrendingComponent;

impl TrendingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed to show every entry, borders included.
    pub fn height(&self, state: &AppState) -> u16 {
        if state.trending.is_empty() {
            0
        } else {
            state.trending.entries().len() as u16 + 2
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if state.trending.is_empty() {
            return;
        }
        let styles = &state.config.config.styles;
        let rank_style = styles.get_or_default("trending_rank");
        let term_style = styles.get_or_default("trending_term");
        let meta_style = styles.get_or_default("meta");

        let lines: Vec<Line> = state
            .trending
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", index + 1), rank_style),
                    Span::styled(entry.search_term.clone(), term_style),
                    Span::styled(
                        format!(" ({} searches)", format_count(entry.count)),
                        meta_style,
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Trending Movies ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
