use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Owns the terminal-global state (raw mode, alternate screen, mouse
/// capture). Acquired once at startup and released exactly once when
/// dropped, so a mid-drag teardown still restores the terminal.
pub struct TerminalGuard {
    released: bool,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self { released: false })
    }

    /// Orderly release; errors surface instead of being swallowed by Drop.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.released {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Panics unwind past the draw loop with the alternate screen active;
/// restore first so the message lands on the real screen.
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
