//! Command-line interface for wordgrid.

use clap::{Parser, Subcommand};

/// Wordgrid - word-guessing game server and terminal client
#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(about = "Word-guessing game: check server and terminal client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP check server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Path to a puzzle config TOML file; falls back to the WORD
        /// environment variable and today's puzzle number
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play interactively in the terminal
    Play {
        /// Path to a puzzle config TOML file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Where the session snapshot is kept between runs
        #[arg(long, default_value = "wordgrid_state.json")]
        state_file: std::path::PathBuf,

        /// Newline-separated word list for offline play; when absent, words
        /// are validated against the online dictionary API
        #[arg(long)]
        word_list: Option<std::path::PathBuf>,
    },
}
