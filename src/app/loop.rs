use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::host::ShellHost;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    host: Arc<dyn ShellHost>,
) -> Result<()> {
    // Blocking reader feeding the single logical thread of control. The
    // task dies with the channel when the loop returns.
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, host, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    host: Arc<dyn ShellHost>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Host results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, host.clone(), action_tx.clone());
            }
        }
    }

    Ok(())
}

/// Forward one effect to the host off the render loop; the outcome comes
/// back as an action like any other input.
pub(crate) fn handle_command(
    command: Command,
    host: Arc<dyn ShellHost>,
    tx: mpsc::Sender<Action>,
) {
    tokio::spawn(async move {
        let result = match command {
            Command::Navigate(route) => host
                .navigate(route)
                .await
                .map(|()| format!("Opened {}", route.title())),
            Command::ExecuteAction(action_id) => host.execute_action(action_id).await,
        };
        let _ = tx
            .send(Action::HostResult(result.map_err(|e| format!("{e:#}"))))
            .await;
    });
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
