//! TimeTrial - Minimal 2D Racing Mini-Game Core
//!
//! Headless entry point: runs one scripted race session and reports the
//! result. Embedding applications use the library directly instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use timetrial::app::GameApp;
use timetrial::save::{self, FileSaveProvider};
use timetrial::{config, hud};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TimeTrial v{}", env!("CARGO_PKG_VERSION"));

    let game_config = config::load_config()?;
    let provider = FileSaveProvider::open(FileSaveProvider::default_path())?;

    tracing::info!("Save file: {:?}", provider.path());

    let mut app = GameApp::new(game_config.clone(), save::shared(provider))?;
    let summary = app.run_session();

    tracing::info!(
        "Session over: time {} (new record: {}), best {}",
        hud::format_time(
            summary.final_time_seconds,
            game_config.time_format,
            game_config.millisecond_digits
        ),
        summary.new_record,
        hud::format_time(
            summary.best_time_seconds,
            game_config.time_format,
            game_config.millisecond_digits
        ),
    );

    Ok(())
}
