//! Terminal setup and teardown
//!
//! Critical: installs a panic hook that restores the terminal before the
//! panic message is printed, so a panicking sort task never leaves the
//! terminal in raw mode.

use std::io::{self, stdout};
use std::panic;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::errors::{Result, SortscopeError};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<Tui> {
    install_panic_hook();

    enable_raw_mode().map_err(terminal_error)?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide).map_err(terminal_error)?;

    Terminal::new(CrosstermBackend::new(stdout())).map_err(terminal_error)
}

/// Leave the alternate screen and restore the cursor
pub fn restore() -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    execute!(stdout(), LeaveAlternateScreen, cursor::Show).map_err(terminal_error)?;
    Ok(())
}

pub(crate) fn terminal_error(err: io::Error) -> SortscopeError {
    SortscopeError::TerminalError(err.to_string())
}
