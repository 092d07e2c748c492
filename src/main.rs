//! AutoValuate TUI - Terminal User Interface for car price predictions
//!
//! A Ratatui-based front end that shows model accuracy, collects a vehicle
//! specification and renders the predicted price from the prediction service.

mod api;
mod app;
mod config;
mod platform;
mod state;
mod storage;
mod ui;

use anyhow::Result;
use api::ApiClient;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::SystemClock;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use storage::{FileStore, KeyValueStore, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autovaluate_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err}");
        AppConfig::default()
    });
    let api = ApiClient::new(&config.api_base_url(), config.request_timeout())?;
    tracing::info!("Using prediction service at {}", api.base_url());

    let store: Arc<dyn KeyValueStore> = match FileStore::default_path() {
        Some(path) => Arc::new(FileStore::new(path)),
        None => {
            tracing::warn!("No data directory available; form values will not persist");
            Arc::new(MemoryStore::default())
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Arc::new(api), store, Arc::new(SystemClock));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Show the empty layout while the service is queried
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.load().await;

    loop {
        // Apply a finished prediction, then advance animated readouts
        app.poll_prediction();
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The analyzing state has been drawn; now send the request
        if app.take_submit_request() {
            app.start_prediction();
        }

        // Use faster polling while readouts animate or a request is out (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_busy() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Resize(_width, _height) => {
                    // Terminal was resized - layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
