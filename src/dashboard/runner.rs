use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::{error, info};

use super::app::App;
use super::events::{dispatch_key, KeyOutcome};
use super::ui;
use crate::cli::DashboardArgs;

pub fn run_dashboard(args: DashboardArgs) -> Result<()> {
    info!(timeframe = %args.timeframe, seed = ?args.seed, "starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(args.timeframe, args.timezone, args.seed);

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "dashboard loop failed");
    }

    res?;
    Ok(())
}

/// Event-driven loop: datasets are regenerated at startup and on `r` only.
/// Timeframe changes and resizes repaint the current snapshot.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    terminal.draw(|f| ui::draw(f, &app))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match dispatch_key(key, &mut app) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Ignored => {}
                    KeyOutcome::Redraw | KeyOutcome::RenderPass => {
                        terminal.draw(|f| ui::draw(f, &app))?;
                    }
                }
            }
            Event::Resize(_, _) => {
                terminal.draw(|f| ui::draw(f, &app))?;
            }
            _ => {}
        }
    }
}
