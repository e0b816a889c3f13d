use anyhow::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use tradedeck::app::{config::ShellConfig, layout::CELL_PX, r#loop::run_loop, state::AppState};
use tradedeck::infrastructure::demo_host::DemoHost;
use tradedeck::infrastructure::terminal::{setup_panic_hook, TerminalGuard};

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Read config and the starting viewport BEFORE touching terminal
    // modes, so a failure here never strands the terminal in raw mode.
    let config = ShellConfig::load();
    let (columns, _) = crossterm::terminal::size()?;
    let app_state = AppState::new(&config, columns.saturating_mul(CELL_PX));
    let host = Arc::new(DemoHost::default());

    let guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, app_state, host).await;

    guard.release()?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
