//! Wordgrid - unified CLI.
//!
//! `serve` runs the stateless HTTP check endpoint; `play` runs the terminal
//! client against a local session.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordgrid::{
    ApiDictionary, AppState, Dictionary, FileStore, GameController, PuzzleConfig, Session,
    WordList,
};

/// Secret used when neither a config file nor the WORD variable is set.
const FALLBACK_SECRET: &str = "rauch";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => run_server(host, port, config).await,
        Command::Play {
            config,
            state_file,
            word_list,
        } => run_play(config, state_file, word_list).await,
    }
}

/// Loads puzzle configuration from a file or the environment.
fn load_config(path: Option<PathBuf>) -> Result<PuzzleConfig> {
    let config = match path {
        Some(path) => PuzzleConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PuzzleConfig::from_env(FALLBACK_SECRET).context("reading WORD from environment")?,
    };
    Ok(config)
}

/// Run the HTTP check server.
async fn run_server(host: String, port: u16, config: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(config)?;
    info!(
        puzzle_id = config.puzzle_id(),
        word_length = config.word_length(),
        "Starting wordgrid check server"
    );

    let state = Arc::new(AppState::new(config, Arc::new(ApiDictionary::new())));
    wordgrid::serve(state, &host, port).await
}

/// Run the terminal client.
async fn run_play(
    config: Option<PathBuf>,
    state_file: PathBuf,
    word_list: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config)?;

    let dictionary: Arc<dyn Dictionary> = match word_list {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading word list {}", path.display()))?;
            Arc::new(WordList::new(
                content.lines().map(str::trim).filter(|w| !w.is_empty()),
            ))
        }
        None => Arc::new(ApiDictionary::new()),
    };

    let controller = GameController::new(
        Session::new(config),
        dictionary,
        Arc::new(FileStore::new(state_file)),
    );

    wordgrid::run_play(Arc::new(controller)).await
}
