//! Undercover terminal entry point.

use std::error::Error;
use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use undercover_core::rng::StdRngSource;
use undercover_rotation::WordRotationManager;
use undercover_round::RoundController;
use undercover_storage::FileStore;
use undercover_vocabulary::Vocabulary;

mod args;
mod config;
mod error;
mod game;

use args::Cli;
use config::{AppConfig, LogFormat};
use error::AppError;
use game::Terminal;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let command = Cli::parse().into_command();
    tracing::debug!(?command, data_dir = %config.data_dir.display(), "starting");

    let vocabulary = load_vocabulary(&config)?;

    let store = Arc::new(FileStore::new(&config.data_dir));
    let mut controller = RoundController::new(WordRotationManager::new(vocabulary, store));
    let mut rng = StdRngSource::from_os_rng();
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());

    game::run(command, &mut controller, &mut terminal, &mut rng)?;

    if controller.rotation().persistence_degraded() {
        tracing::warn!(
            "usage history could not be saved; this round's words may be offered again"
        );
    }
    Ok(())
}

/// Without a vocabulary there is nothing to play; this is the only fatal load.
fn load_vocabulary(config: &AppConfig) -> Result<Vocabulary, AppError> {
    let vocabulary = match &config.vocabulary_path {
        Some(path) => Vocabulary::from_path(path)?,
        None => Vocabulary::load_all()?,
    };
    tracing::info!(pairs = vocabulary.len(), "vocabulary loaded");
    Ok(vocabulary)
}

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the cards shown on stdout.
fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
