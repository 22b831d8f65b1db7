use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::AbortHandle};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{search::SearchMsg, trending::TrendingMsg, Msg},
    },
    domain::movie::FetchError,
    infrastructure::{
        debouncer::Debouncer,
        tmdb::MovieCatalog,
        trending::{StoreError, TrendingStore},
    },
};

/// External services the executor talks to
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn MovieCatalog>,
    /// `None` when no trending store is configured
    pub store: Option<Arc<dyn TrendingStore>>,
}

/// Executes Elm commands: spawns network calls and timers, and reports
/// their results back as `Msg`s on `msg_sender`.
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    services: Services,
    trending_limit: u32,
    debouncer: Debouncer,
    in_flight: Option<AbortHandle>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(
        msg_sender: mpsc::UnboundedSender<Msg>,
        services: Services,
        debounce: Duration,
        trending_limit: u32,
    ) -> Self {
        Self {
            msg_sender,
            services,
            trending_limit,
            debouncer: Debouncer::new(debounce),
            in_flight: None,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn execute_commands(&mut self, cmds: Vec<Cmd>) -> Result<()> {
        for cmd in cmds {
            self.execute_command(cmd)?;
        }
        Ok(())
    }

    /// Execute a single command. Must be called inside a tokio runtime.
    pub fn execute_command(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::ScheduleSettle { query } => {
                let sender = self.msg_sender.clone();
                self.debouncer.schedule(move || {
                    let _ = sender.send(Msg::Search(SearchMsg::QuerySettled(query)));
                });
            }

            Cmd::FetchMovies { request_id, query } => {
                if let Some(previous) = self.in_flight.take() {
                    previous.abort();
                }
                let catalog = Arc::clone(&self.services.catalog);
                let sender = self.msg_sender.clone();
                log::info!("Fetching movies #{request_id} for {query:?}");
                let handle = tokio::spawn(async move {
                    let result = catalog
                        .fetch_movies(query.clone())
                        .await
                        .map_err(FetchError::from);
                    let _ = sender.send(Msg::Search(SearchMsg::MoviesLoaded {
                        request_id,
                        query,
                        result,
                    }));
                });
                self.in_flight = Some(handle.abort_handle());
            }

            Cmd::RecordSearch { query, movie } => match &self.services.store {
                Some(store) => {
                    let store = Arc::clone(store);
                    tokio::spawn(async move {
                        if let Err(e) = store.record_search(query.clone(), movie).await {
                            log::warn!("Failed to update search count for {query:?}: {e}");
                        }
                    });
                }
                None => log::debug!("Search count for {query:?} not recorded: no store"),
            },

            Cmd::LoadTrending => {
                let sender = self.msg_sender.clone();
                match &self.services.store {
                    Some(store) => {
                        let store = Arc::clone(store);
                        let limit = self.trending_limit;
                        tokio::spawn(async move {
                            let msg = match store.trending(limit).await {
                                Ok(entries) => TrendingMsg::Loaded(entries),
                                Err(e) => TrendingMsg::LoadFailed(e.to_string()),
                            };
                            let _ = sender.send(Msg::Trending(msg));
                        });
                    }
                    None => {
                        sender.send(Msg::Trending(TrendingMsg::LoadFailed(
                            StoreError::NotConfigured.to_string(),
                        )))?;
                    }
                }
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => {
                    let _ = tx.send(tui_cmd);
                }
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::LogError { message } => log::error!("{message}"),
        }
        Ok(())
    }
}
