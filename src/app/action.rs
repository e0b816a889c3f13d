use crate::domain::models::Route;

/// Every input the shell reacts to, dispatched through one reducer. The
/// closed set keeps the five-and-a-half panel states enumerable and lets
/// tests replay an event sequence and assert the final state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,
    /// Viewport width changed, in layout units.
    ViewportChanged(u16),

    // --- Command Palette ---
    OpenPalette,
    ClosePalette,
    PaletteInput(char),
    PaletteBackspace,
    PaletteSelectNext,
    PaletteSelectPrev,
    /// Execute the command under the cursor.
    PaletteConfirm,
    /// Execute a clicked result row, bypassing the cursor.
    PaletteConfirmIndex(usize),

    // --- Side Panel ---
    ToggleSidebar,
    CloseMobileOverlay,
    Navigate(Route),
    ResizeStart,
    /// Absolute pointer x in layout units.
    ResizeMove(u16),
    ResizeEnd,

    // --- Host Results ---
    HostResult(Result<String, String>),
}
