//! Command-line interface for gallows.

use clap::Parser;
use std::path::PathBuf;

/// Gallows - Hangman in the terminal
#[derive(Parser, Debug)]
#[command(name = "gallows")]
#[command(about = "Hangman for one or two players in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Random-word service URL for single-player mode (defaults to Wordnik)
    #[arg(long)]
    pub word_url: Option<String>,

    /// File to write logs to (the TUI owns the screen)
    #[arg(long, default_value = "gallows_tui.log")]
    pub log_file: PathBuf,
}
