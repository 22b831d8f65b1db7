//! Component collection
//!
//! Components are stateless renderers that receive `AppState` as a parameter.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod results;
pub mod search_input;
pub mod status_bar;
pub mod trending;

pub use results::ResultsComponent;
pub use search_input::SearchInputComponent;
pub use status_bar::StatusBarComponent;
pub use trending::TrendingComponent;

pub const HEADLINE: &str = "Find Movies You'll Enjoy Without The Hassle";

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub search_input: SearchInputComponent,
    pub trending: TrendingComponent,
    pub results: ResultsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point: headline, search field, trending list
    /// (when there is one), results and the status bar.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(self.trending.height(state)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let headline = Line::styled(HEADLINE, state.config.config.styles.get_or_default("title"))
            .alignment(Alignment::Center);
        frame.render_widget(headline, layout[0]);
        self.search_input.view(state, frame, layout[1]);
        self.trending.view(state, frame, layout[2]);
        self.results.view(state, frame, layout[3]);
        self.status_bar.view(state, frame, layout[4]);
    }
}
