use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{search::SearchMsg, system::SystemMsg, trending::TrendingMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::TerminalError(error))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // Rendering is orchestrated by the runner
        RawMsg::Render => vec![],
    }
}

/// Bound keys win; anything else edits the search field.
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.action_for(&key) {
        return vec![translate_action(action)];
    }

    let input = state.search.input();
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut text = input.to_string();
            text.push(c);
            vec![Msg::Search(SearchMsg::InputChanged(text))]
        }
        KeyCode::Backspace if !input.is_empty() => {
            let mut text = input.to_string();
            text.pop();
            vec![Msg::Search(SearchMsg::InputChanged(text))]
        }
        _ => vec![],
    }
}

fn translate_action(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        Action::ScrollUp => Msg::Search(SearchMsg::ScrollUp),
        Action::ScrollDown => Msg::Search(SearchMsg::ScrollDown),
        Action::ScrollToTop => Msg::Search(SearchMsg::ScrollToTop),
        Action::ScrollToBottom => Msg::Search(SearchMsg::ScrollToBottom),
        Action::ClearSearch => Msg::Search(SearchMsg::Clear),
        Action::RefreshTrending => Msg::Trending(TrendingMsg::Refresh),
    }
}

/// Pasted text is appended as one edit; line breaks become spaces.
fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    let pasted: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if pasted.is_empty() {
        return vec![];
    }
    let mut input = state.search.input().to_string();
    input.push_str(&pasted);
    vec![Msg::Search(SearchMsg::InputChanged(input))]
}
