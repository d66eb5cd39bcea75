//! roster-desk - terminal console for employee records
//!
//! Run: cargo run --bin roster-desk

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use roster_desk::app::{App, AppEvent, Effect};
use roster_desk::config::DeskConfig;
use roster_desk::effects::spawn_effect_runner;
use roster_desk::ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = DeskConfig::from_env();

    // Route tracing into the in-app log pane
    let env_filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    // Also init log crate adapter in case dependencies use the log crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Reducer runs here; network calls run on the effect runner
    let (effect_tx, effect_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let client = config.client_config().build_http_client();
    spawn_effect_runner(client, effect_rx, event_tx);

    let mut app = App::new();
    tracing::info!("Employee API at {}", config.api_url);
    dispatch(&effect_tx, app.on_start());

    let res = run_app(&mut terminal, &mut app, &effect_tx, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    effect_tx: &mpsc::UnboundedSender<Effect>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Key input; the timeout keeps the loop ticking while idle so
        // completions below are folded in promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    let effects = app.on_key(key);
                    dispatch(effect_tx, effects);
                }
            }
        }

        // Completed network calls (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            let effects = app.on_event(event);
            dispatch(effect_tx, effects);
        }
    }
}

/// Hand requested effects to the runner
fn dispatch(effect_tx: &mpsc::UnboundedSender<Effect>, effects: Vec<Effect>) {
    for effect in effects {
        if effect_tx.send(effect).is_err() {
            tracing::warn!("Effect runner is gone, dropping request");
        }
    }
}
