//! Entering and leaving the full-screen mode the board is drawn in.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal the board renders to.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("could not enter full-screen mode: {0}")]
    Enter(#[source] io::Error),

    #[error("could not leave full-screen mode: {0}")]
    Leave(#[source] io::Error),
}

/// Puts stdout in raw mode on the alternate screen.
///
/// Mouse capture is requested only when `mouse` is set. If any step
/// fails, whatever was already switched on is switched back off.
///
/// # Errors
///
/// Returns [`TerminalError::Enter`] with the first failure.
pub fn setup_terminal(mouse: bool) -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Enter)?;

    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen).and_then(|()| {
        if mouse {
            execute!(stdout, EnableMouseCapture)
        } else {
            Ok(())
        }
    });
    if let Err(e) = entered {
        let _ = leave(&mut stdout);
        return Err(TerminalError::Enter(e));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Enter)
}

/// Leaves full-screen mode and shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Leave`] if the terminal refuses.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave(terminal.backend_mut()).map_err(TerminalError::Leave)?;
    terminal.show_cursor().map_err(TerminalError::Leave)
}

/// Chains a hook that leaves full-screen mode before the current panic
/// hook prints, so the message lands on the normal screen.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

// Disabling mouse capture is a no-op when it was never enabled.
fn leave(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}
