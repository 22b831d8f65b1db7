use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Commands issued once when the UI starts: the initial movie list and the
/// trending list.
pub fn init(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let mut commands = state.search.start();
    commands.push(Cmd::LoadTrending);
    (state, commands)
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Search(search_msg) => state.search.update(search_msg),
        Msg::Trending(trending_msg) => state.trending.update(trending_msg),
    };
    (state, commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::{search::SearchMsg, system::SystemMsg, trending::TrendingMsg},
        domain::movie::Movie,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init_fetches_popular_and_trending() {
        let (state, cmds) = init(AppState::default());
        assert!(state.search.is_loading());
        assert_eq!(
            cmds,
            vec![
                Cmd::FetchMovies {
                    request_id: 1,
                    query: String::new()
                },
                Cmd::LoadTrending,
            ]
        );
    }

    #[test]
    fn test_system_messages_are_delegated() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_trending_messages_are_delegated() {
        let (_, cmds) = update(Msg::Trending(TrendingMsg::Refresh), AppState::default());
        assert_eq!(cmds, vec![Cmd::LoadTrending]);
    }

    #[test]
    fn test_full_search_cycle() {
        let (state, _) = init(AppState::default());
        let (state, _) = update(
            Msg::Search(SearchMsg::InputChanged("dune".to_string())),
            state,
        );
        let (state, cmds) = update(
            Msg::Search(SearchMsg::QuerySettled("dune".to_string())),
            state,
        );
        assert_eq!(
            cmds,
            vec![Cmd::FetchMovies {
                request_id: 2,
                query: "dune".to_string()
            }]
        );

        let (state, cmds) = update(
            Msg::Search(SearchMsg::MoviesLoaded {
                request_id: 2,
                query: "dune".to_string(),
                result: Ok(vec![Movie::new(438631, "Dune")]),
            }),
            state,
        );
        assert!(!state.search.is_loading());
        assert_eq!(
            cmds,
            vec![Cmd::RecordSearch {
                query: "dune".to_string(),
                movie: Movie::new(438631, "Dune"),
            }]
        );
    }
}
