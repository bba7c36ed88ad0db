//! Terminal User Interface module
//!
//! The interactive dashboard: terminal setup and teardown, the event
//! loop, application state, and rendering.

pub mod app;
pub mod event;
pub mod view;

use std::io;
use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::predict::{PredictionClient, PredictionWorker};
use crate::services::PlannerSession;

pub use app::App;
pub use event::{Event, EventHandler};

/// Run the interactive dashboard until the user quits
pub fn run_dashboard(session: PlannerSession, settings: &Settings) -> PlannerResult<()> {
    let client = PredictionClient::new(&settings.prediction_url);
    let worker = PredictionWorker::new(client);
    let mut app = App::new(session, worker, settings.currency_symbol.clone());

    enable_raw_mode().map_err(|e| PlannerError::Tui(e.to_string()))?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| PlannerError::Tui(e.to_string()))?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| PlannerError::Tui(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> PlannerResult<()> {
    let events = EventHandler::new(Duration::from_millis(250));

    while !app.should_quit {
        terminal
            .draw(|frame| view::render(frame, app))
            .map_err(|e| PlannerError::Tui(e.to_string()))?;

        match events.next() {
            Ok(Event::Key(key)) => handle_key(app, key),
            Ok(Event::Resize(_, _)) => {}
            Ok(Event::Tick) => app.on_tick(),
            Err(_) => {
                return Err(PlannerError::Tui("event channel closed".to_string()));
            }
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals deliver both press and release events
    if key.kind == KeyEventKind::Press {
        app.handle_key(key);
    }
}
