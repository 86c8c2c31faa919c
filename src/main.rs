use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ecodash::alerts::{AlertStore, FileBlobStore};
use ecodash::app::action::Action;
use ecodash::app::event::AppEvent;
use ecodash::app::handler;
use ecodash::app::samples;
use ecodash::app::state::AppState;
use ecodash::{config, logging, ui, worker};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Open the alert log before touching the terminal so load problems
    // surface in the log, not on a half-drawn screen
    let store = AlertStore::open(FileBlobStore::new(config::expand_home(
        &cfg.alerts.data_dir,
    )));
    if cfg.alerts.seed_samples {
        match samples::seed_if_empty(&store) {
            Ok(0) => {}
            Ok(n) => tracing::info!(count = n, "seeded sample alerts"),
            Err(e) => tracing::warn!("failed to seed sample alerts: {}", e),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, store).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    store: AlertStore,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());

    // Every store change is forwarded into the event loop as a snapshot
    let alerts_tx = event_tx.clone();
    let subscription = store.subscribe(move |snapshot| {
        let _ = alerts_tx.send(AppEvent::AlertsChanged(snapshot));
    });

    let push_task = cfg
        .alerts
        .demo_push_secs
        .filter(|secs| *secs > 0)
        .map(|secs| worker::push::spawn_demo_push(store.clone(), Duration::from_secs(secs)));

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (10 FPS = 100ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Refresh => {
                    worker::refresh::spawn_refresh(&cfg.refresh, event_tx.clone());
                }
                Action::Navigate(route) => {
                    tracing::debug!(to = route.path(), "navigate");
                    state.navigate(route);
                }
                Action::SendAlert {
                    kind,
                    title,
                    message,
                } => {
                    if let Err(e) = store.send_alert(kind, title, message) {
                        state.status_message = Some(format!("Alert not saved: {}", e));
                        state.dirty = true;
                    }
                }
                Action::MarkRead { id } => {
                    if let Err(e) = store.mark_as_read(&id) {
                        state.status_message = Some(format!("Alert not saved: {}", e));
                        state.dirty = true;
                    }
                }
                Action::MarkAllRead => {
                    if let Err(e) = store.mark_all_as_read() {
                        state.status_message = Some(format!("Alert not saved: {}", e));
                        state.dirty = true;
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    if let Some(task) = push_task {
        task.abort();
    }
    subscription.unsubscribe();
    Ok(())
}
