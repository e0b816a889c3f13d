use crate::app::layout::CELL_PX;
use crate::app::state::{AppMode, AppState};
use crate::app::{action::Action, ui};
use crate::components::modals::command_palette::{self, PaletteHit};
use crate::components::sidebar::{self, SidebarHit};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

fn to_px(column: u16) -> u16 {
    column.saturating_mul(CELL_PX)
}

/// Translate one terminal event into at most one action.
///
/// Precedence is structural: an active resize session owns the pointer
/// stream, then the open palette owns the keyboard, and only then does the
/// global keymap see anything. The palette's Escape and the router's
/// mobile-overlay Escape can therefore never fire from the same keystroke.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    if app_state.layout.resizing {
        return map_resizing(event);
    }

    match app_state.mode {
        AppMode::Palette => map_palette(event, app_state, terminal_size),
        AppMode::Normal => map_normal(event, app_state, terminal_size),
    }
}

/// While a drag is live the session is the only pointer consumer: no
/// hover, clicks or key bindings elsewhere until the button is released.
fn map_resizing(event: Event) -> Option<Action> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                Some(Action::ResizeMove(to_px(mouse.column)))
            }
            MouseEventKind::Up(MouseButton::Left) => Some(Action::ResizeEnd),
            _ => None,
        },
        Event::Resize(width, _) => Some(Action::ViewportChanged(to_px(width))),
        _ => None,
    }
}

fn map_palette(event: Event, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    match event {
        Event::Key(key) => map_palette_key(key),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                let palette = app_state.palette.as_ref()?;
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                match command_palette::hit_test(
                    palette,
                    &app_state.registry,
                    area,
                    mouse.column,
                    mouse.row,
                ) {
                    PaletteHit::Item(flat) => Some(Action::PaletteConfirmIndex(flat)),
                    PaletteHit::Outside => Some(Action::ClosePalette),
                    PaletteHit::Surface => None,
                }
            } else {
                None
            }
        }
        Event::Resize(width, _) => Some(Action::ViewportChanged(to_px(width))),
        _ => None,
    }
}

fn map_palette_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Enter => Some(Action::PaletteConfirm),
        KeyCode::Up => Some(Action::PaletteSelectPrev),
        KeyCode::Down => Some(Action::PaletteSelectNext),
        KeyCode::Backspace => Some(Action::PaletteBackspace),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::SUPER)
            {
                // Reopening while open is an explicit no-op.
                match c {
                    'k' => Some(Action::OpenPalette),
                    _ => None,
                }
            } else {
                Some(Action::PaletteInput(c))
            }
        }
        _ => None,
    }
}

fn map_normal(event: Event, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    match event {
        Event::Resize(width, _) => Some(Action::ViewportChanged(to_px(width))),
        Event::Key(key) => app_state.keymap.get_action(key),
        Event::Mouse(mouse) => map_normal_mouse(mouse, app_state, terminal_size),
        _ => None,
    }
}

fn map_normal_mouse(mouse: MouseEvent, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return None;
    };
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let shell = ui::get_layout(area, &app_state.layout);

    // Mobile overlay up: the panel handles its rows, everything else is
    // the backdrop and dismisses.
    if let Some(panel) = shell.mobile_panel {
        return match sidebar::hit(panel, mouse.column, mouse.row) {
            Some(SidebarHit::Route(route)) => Some(Action::Navigate(route)),
            Some(SidebarHit::Toggle) => Some(Action::CloseMobileOverlay),
            None => Some(Action::CloseMobileOverlay),
        };
    }

    // Pointer-down on the drag handle starts a resize session.
    if let Some(handle) = shell.handle {
        if mouse.column == handle.x && mouse.row >= handle.y && mouse.row < handle.bottom() {
            return Some(Action::ResizeStart);
        }
    }

    match sidebar::hit(shell.sidebar, mouse.column, mouse.row) {
        Some(SidebarHit::Route(route)) => Some(Action::Navigate(route)),
        Some(SidebarHit::Toggle) => Some(Action::ToggleSidebar),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::PaletteState;
    use crate::domain::models::Route;
    use crossterm::event::{KeyEventKind, KeyEventState};

    const SIZE: Size = Size {
        width: 160,
        height: 48,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn palette_open_state() -> AppState {
        let mut state = AppState::default();
        state.palette = Some(PaletteState::open(&state.registry));
        state.mode = AppMode::Palette;
        state
    }

    #[test]
    fn global_bindings_in_normal_mode() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(ctrl('k'), &state, SIZE),
            Some(Action::OpenPalette)
        );
        assert_eq!(
            map_event_to_action(ctrl('b'), &state, SIZE),
            Some(Action::ToggleSidebar)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::CloseMobileOverlay)
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char('x')), &state, SIZE), None);
    }

    #[test]
    fn release_events_are_dropped() {
        let state = AppState::default();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::empty();
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn palette_owns_escape_over_the_router() {
        // Mobile with the overlay up AND the palette open: Escape must
        // close the palette only.
        let mut state = palette_open_state();
        state.layout.viewport_changed(500);
        state.layout.toggle_panel();
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClosePalette)
        );
    }

    #[test]
    fn palette_keys_map_to_palette_actions() {
        let state = palette_open_state();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::PaletteInput('q')),
            "printable keys are query input, not global bindings"
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::PaletteSelectNext)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Backspace), &state, SIZE),
            Some(Action::PaletteBackspace)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::PaletteConfirm)
        );
        assert_eq!(
            map_event_to_action(ctrl('k'), &state, SIZE),
            Some(Action::OpenPalette),
            "reopen while open stays idempotent"
        );
        assert_eq!(map_event_to_action(ctrl('x'), &state, SIZE), None);
    }

    #[test]
    fn click_outside_the_palette_closes_it() {
        let state = palette_open_state();
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 0, 0),
                &state,
                SIZE
            ),
            Some(Action::ClosePalette)
        );
    }

    #[test]
    fn resize_events_scale_to_layout_units() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(Event::Resize(100, 48), &state, SIZE),
            Some(Action::ViewportChanged(800))
        );
    }

    #[test]
    fn pointer_down_on_the_handle_starts_a_session() {
        let state = AppState::default();
        // 280 px panel = 35 cells; handle sits on column 34.
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 34, 10),
                &state,
                SIZE
            ),
            Some(Action::ResizeStart)
        );
    }

    #[test]
    fn collapsed_panel_has_no_handle_to_grab() {
        let mut state = AppState::default();
        state.layout.toggle_panel();
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 34, 10),
                &state,
                SIZE
            ),
            None
        );
    }

    #[test]
    fn active_session_owns_the_pointer_and_keyboard() {
        let mut state = AppState::default();
        assert!(state.layout.begin_resize());
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10), &state, SIZE),
            Some(Action::ResizeMove(320))
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, 50, 10), &state, SIZE),
            Some(Action::ResizeMove(400))
        );
        assert_eq!(
            map_event_to_action(ctrl('k'), &state, SIZE),
            None,
            "shortcuts are suppressed for the drag's duration"
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 3, 3),
                &state,
                SIZE
            ),
            None,
            "clicks elsewhere are suppressed too"
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Up(MouseButton::Left), 50, 10), &state, SIZE),
            Some(Action::ResizeEnd)
        );
    }

    #[test]
    fn sidebar_clicks_navigate_and_toggle() {
        let state = AppState::default();
        // Nav rows start under the title block: body starts at y=1.
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 3, 3),
                &state,
                SIZE
            ),
            Some(Action::Navigate(Route::Dashboard))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 3, 46),
                &state,
                SIZE
            ),
            Some(Action::ToggleSidebar)
        );
    }

    #[test]
    fn mobile_backdrop_click_dismisses_the_overlay() {
        let mut state = AppState::default();
        state.layout.viewport_changed(500);
        state.layout.toggle_panel();
        let size = Size {
            width: 62,
            height: 20,
        };
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 60, 10),
                &state,
                size
            ),
            Some(Action::CloseMobileOverlay)
        );
        // Rows inside the floating panel still navigate.
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 3, 4),
                &state,
                size
            ),
            Some(Action::Navigate(Route::Portfolio))
        );
    }

    #[test]
    fn drag_scenario_through_the_full_pipeline() {
        // 1200 px desktop: grab the handle, drag past the max, release.
        let mut state = AppState::default();
        let size = Size {
            width: 150,
            height: 48,
        };
        reducer::update(&mut state, Action::ViewportChanged(1200));
        let events = [
            mouse(MouseEventKind::Down(MouseButton::Left), 34, 10),
            mouse(MouseEventKind::Drag(MouseButton::Left), 37, 10),
            mouse(MouseEventKind::Drag(MouseButton::Left), 62, 10),
            mouse(MouseEventKind::Up(MouseButton::Left), 62, 10),
        ];
        for event in events {
            if let Some(action) = map_event_to_action(event, &state, size) {
                reducer::update(&mut state, action);
            }
        }
        assert_eq!(state.layout.width, 400);
        assert!(!state.layout.resizing);
    }

    #[test]
    fn shrink_mid_drag_aborts_and_removes_the_handle() {
        let mut state = AppState::default();
        let events = [
            mouse(MouseEventKind::Down(MouseButton::Left), 34, 10),
            mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10),
            Event::Resize(87, 48), // 696 px: Mobile
            mouse(MouseEventKind::Moved, 45, 10),
        ];
        for event in events {
            if let Some(action) = map_event_to_action(event, &state, SIZE) {
                reducer::update(&mut state, action);
            }
        }
        assert!(!state.layout.resizing);
        assert!(!state.layout.mobile_open);
        assert!(!state.layout.has_drag_handle());
        assert_eq!(state.layout.width, 320, "width frozen at the abort point");
    }
}
