//! Terminal UI for gallows.

#![warn(missing_docs)]

mod app;
mod ui;

use crate::cli::Cli;
use crate::words::WordSupplier;
use anyhow::Result;
use app::{App, Screen};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

/// Run the TUI.
pub async fn run_tui(cli: Cli) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting gallows TUI");

    let supplier = match &cli.word_url {
        Some(url) => WordSupplier::with_base_url(url.clone()),
        None => WordSupplier::new(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(supplier)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main event loop: draw, resolve pending fetches, route keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // The loading frame drawn above stays on screen while the word
        // fetch is awaited; the supplier never fails.
        if matches!(app.screen(), Screen::Loading) {
            app.resolve_word().await;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                debug!(code = ?key.code, "Key pressed");
                if app.handle_key(key.code) {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}
