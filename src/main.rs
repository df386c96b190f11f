//! Feedback Widget - a floating feedback form for the terminal
//!
//! A Ratatui-based host screen with a toggleable feedback panel, autosaved
//! drafts and retryable submission.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feedback_widget::api::{FeedbackApi, HttpFeedbackClient, SimulatedFeedbackClient};
use feedback_widget::app::{spawn_flag_fetch, App};
use feedback_widget::config::WidgetConfig;
use feedback_widget::state::{
    DraftStore, FeatureFlagProvider, FeedbackWidget, FileStorage, MemoryStorage,
};
use feedback_widget::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WidgetConfig::load()?;
    init_logging(&config);

    let api: Arc<dyn FeedbackApi> = match &config.api_url {
        Some(url) => {
            tracing::info!("Using feedback service at {url}");
            Arc::new(HttpFeedbackClient::new(url)?)
        }
        None => {
            tracing::info!("No feedback service configured, using simulated backend");
            Arc::new(SimulatedFeedbackClient::new())
        }
    };

    let store = match config.resolved_data_dir() {
        Some(dir) => DraftStore::new(FileStorage::new(dir)),
        None => {
            tracing::warn!("No data directory available, drafts will not survive a restart");
            DraftStore::new(MemoryStorage::new())
        }
    };

    let provider = FeatureFlagProvider::new();
    let mut builder = FeedbackWidget::builder().flags(provider.handle()).store(store);
    if let Some(key) = &config.draft_key {
        builder = builder.draft_key(key.clone());
    }
    let widget = builder.build()?;
    spawn_flag_fetch(Arc::clone(&api), provider);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(widget, api);
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file since the terminal belongs to the UI; stderr if that fails
fn init_logging(config: &WidgetConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "feedback_widget=info".into());

    let log_file = config.resolved_log_file().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished submissions before drawing
        app.poll_background();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short poll while an attempt is outstanding so its result shows promptly
        let poll_duration = if app.widget.submission().is_in_flight() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        // Let background tasks progress between ticks
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
