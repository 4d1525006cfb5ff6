use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use fitlab_core::{FitlabConfig, RapidApiCatalog};
use fitlab_tui::request::RequestTracker;
use fitlab_tui::worker;
use fitlab_tui::{input, logging, ui, AppState};

type Term = Terminal<CrosstermBackend<Stdout>>;

const TICK: Duration = Duration::from_millis(50);
const SHUTDOWN_LIMIT: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    install_panic_hook();
    let log_guard = logging::init();

    let config = FitlabConfig::load_default().context("loading configuration")?;
    let catalog = RapidApiCatalog::new(&config.catalog).context("building catalog client")?;

    let requests = RequestTracker::new();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, requests.clone(), Box::new(catalog))
        .context("spawning worker thread")?;

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, requests, &config.filters);
    if let Some(guard) = &log_guard {
        app.set_status(format!("Logs: {}", guard.log_dir().display()));
    }
    if config.catalog.api_key.is_empty() {
        app.set_warning("No API key configured: set FITLAB_API_KEY");
    }

    let mut terminal = enter_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app);

    leave_terminal(&mut terminal)?;
    worker::shutdown_worker(&cmd_tx, worker_handle, SHUTDOWN_LIMIT);

    outcome
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        tracing::error!(panic = %info, "panic");
        default_hook(info);
    }));
}

fn enter_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, apply finished searches, then wait up to one tick for input.
fn event_loop(terminal: &mut Term, app: &mut AppState) -> Result<()> {
    while app.running {
        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => input::handle_key(app, key),
            Event::Mouse(mouse) => input::handle_mouse(app, mouse),
            _ => {}
        }
    }
    Ok(())
}
