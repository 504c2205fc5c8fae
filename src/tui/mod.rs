// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished fetches)
// - Spawning stats requests off the render loop

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::controller::LoadTicket;
use crate::dashboard::Dashboard;
use crate::logging::LogBuffer;
use crate::stats::{FetchError, StatsClient, StatsResponse};
use anyhow::{Context, Result};
use app::{App, AppAction};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

/// A finished fetch, tagged with the ticket it was issued for
type FetchOutcome = (LoadTicket, Result<StatsResponse, FetchError>);

/// Run the TUI until the user quits
///
/// `initial_load` issues a request before the first frame.
pub async fn run_tui(
    dashboard: Dashboard,
    client: StatsClient,
    theme: ThemeKind,
    log_buffer: LogBuffer,
    initial_load: bool,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let api_url = client.api_url().to_string();
    let mut app = App::new(dashboard, theme, log_buffer, api_url);

    let result = run_event_loop(&mut terminal, &mut app, client, initial_load).await;

    // Restore terminal even if the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Issue the request on a background task; the result comes back on `tx`
fn spawn_fetch(client: &StatsClient, ticket: LoadTicket, tx: &mpsc::UnboundedSender<FetchOutcome>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch(ticket.after_date).await;
        // Receiver gone means the TUI is shutting down
        let _ = tx.send((ticket, result));
    });
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, log panel refresh)
/// 3. Finished fetches
///
/// Fetches are never awaited here, so input stays responsive while a slow
/// request is in flight and a newer request can supersede it.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: StatsClient,
    initial_load: bool,
) -> Result<()> {
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    if initial_load {
        if let AppAction::Fetch(ticket) = app.begin_load() {
            spawn_fetch(&client, ticket, &fetch_tx);
        }
    }

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        if let AppAction::Fetch(ticket) = app.handle_key(key_event) {
                            spawn_fetch(&client, ticket, &fetch_tx);
                        }
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some((ticket, result)) = fetch_rx.recv() => {
                app.apply_result(ticket, result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Quitting dashboard");
    Ok(())
}
