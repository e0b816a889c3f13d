use super::{
    action::Action,
    command::Command,
    commands::CommandAction,
    state::{AppMode, AppState, PaletteState},
};
use std::time::{Duration, Instant};

const STATUS_LINGER: Duration = Duration::from_secs(4);

/// The single transition function: applies one action to the state and
/// optionally emits a host effect. Total — every input is sanitized by
/// clamping or vacuous predicates, never by raising.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if let Some(clear_at) = state.status_clear_time {
                if Instant::now() >= clear_at {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }
        Action::ViewportChanged(width) => {
            state.layout.viewport_changed(width);
        }

        // --- Command Palette ---
        Action::OpenPalette => {
            // Idempotent: reopening must not reset a live query.
            if state.palette.is_none() {
                state.palette = Some(PaletteState::open(&state.registry));
                state.mode = AppMode::Palette;
            }
        }
        Action::ClosePalette => {
            close_palette(state);
        }
        Action::PaletteInput(c) => {
            if let Some(palette) = &mut state.palette {
                palette.push_char(c, &state.registry);
            }
        }
        Action::PaletteBackspace => {
            if let Some(palette) = &mut state.palette {
                palette.pop_char(&state.registry);
            }
        }
        Action::PaletteSelectNext => {
            if let Some(palette) = &mut state.palette {
                palette.select_next();
            }
        }
        Action::PaletteSelectPrev => {
            if let Some(palette) = &mut state.palette {
                palette.select_prev();
            }
        }
        Action::PaletteConfirm => {
            let chosen = state
                .palette
                .as_ref()
                .and_then(|p| p.selected_action(&state.registry));
            // Zero results: Enter is a no-op and the palette stays up.
            if let Some(command_action) = chosen {
                close_palette(state);
                return Some(run_command_action(state, command_action));
            }
        }
        Action::PaletteConfirmIndex(row) => {
            let chosen = state
                .palette
                .as_ref()
                .and_then(|p| p.action_at(row, &state.registry));
            if let Some(command_action) = chosen {
                close_palette(state);
                return Some(run_command_action(state, command_action));
            }
        }

        // --- Side Panel ---
        Action::ToggleSidebar => {
            state.layout.toggle_panel();
        }
        Action::CloseMobileOverlay => {
            state.layout.close_overlay();
        }
        Action::Navigate(route) => {
            return Some(run_command_action(state, CommandAction::Navigate(route)));
        }
        Action::ResizeStart => {
            state.layout.begin_resize();
        }
        Action::ResizeMove(pointer_x) => {
            state.layout.resize_to(pointer_x);
        }
        Action::ResizeEnd => {
            state.layout.end_resize();
        }

        // --- Host Results ---
        Action::HostResult(result) => match result {
            Ok(message) => {
                state.status_message = Some(message);
                state.status_clear_time = Some(Instant::now() + STATUS_LINGER);
                state.last_error = None;
            }
            Err(error) => {
                state.last_error = Some(error);
            }
        },
    }
    None
}

fn close_palette(state: &mut AppState) {
    state.palette = None;
    state.mode = AppMode::Normal;
}

/// Navigation updates the active route and dismisses the mobile overlay;
/// both variants are forwarded to the host untouched.
fn run_command_action(state: &mut AppState, action: CommandAction) -> Command {
    match action {
        CommandAction::Navigate(route) => {
            state.route = route;
            state.layout.close_overlay();
            Command::Navigate(route)
        }
        CommandAction::Execute(action_id) => Command::ExecuteAction(action_id),
    }
}
