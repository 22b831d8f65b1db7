use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use moviescout::{
    core::{cmd_executor::Services, state::AppState},
    infrastructure::{
        cli::Cli,
        config::Config,
        tmdb::TmdbClient,
        trending::{AppwriteStore, TrendingStore},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(debounce_ms) = args.debounce_ms {
        config.debounce_ms = debounce_ms;
    }

    let catalog = Arc::new(TmdbClient::new(&config.tmdb)?);
    let store: Option<Arc<dyn TrendingStore>> = if config.trending.is_configured() {
        let store = AppwriteStore::new(&config.trending, &config.tmdb.image_base_url)?;
        Some(Arc::new(store))
    } else {
        log::info!("Trending store not configured; trending list disabled");
        None
    };
    let services = Services { catalog, store };

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .paste(true);
    let mut runner = AppRunner::new(tui, AppState::new_with_config(config), services);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
