//! Gallows - Hangman in the terminal.

#![warn(missing_docs)]

mod cli;
mod games;
mod tui;
mod words;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tui::run_tui(cli).await
}
