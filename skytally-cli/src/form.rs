pub mod session;
mod ui;

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{form::session::Session, prelude::*};

/// Run the interactive calculator until the user leaves it.
///
/// The raw-mode terminal with its alternate screen is the drawing surface:
/// acquired here and restored on every exit path, error included.
pub fn run(session: &mut Session) -> Result {
    enable_raw_mode().context("failed to enable the terminal raw mode")?;
    let result = run_in_alternate_screen(session);
    let restored = restore_terminal();
    result.and(restored)
}

fn run_in_alternate_screen(session: &mut Session) -> Result {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter the alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    event_loop(&mut terminal, session)
}

/// Both steps are attempted even when the first fails: a raw mode that will
/// not reset is no reason to stay on the alternate screen.
fn restore_terminal() -> Result {
    let raw_mode = disable_raw_mode().context("failed to disable the terminal raw mode");
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("failed to restore the terminal screen");
    raw_mode.and(screen)
}

/// The screen is redrawn from scratch on every pass, so the widgets never
/// carry state between frames.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result {
    loop {
        terminal.draw(|frame| ui::render(frame, session))?;
        if let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && session.handle_key(key)
        {
            return Ok(());
        }
    }
}
