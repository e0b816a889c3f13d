use super::commands::{default_registry, CommandRegistry};
use super::config::ShellConfig;
use super::keymap::KeyMap;
use super::layout::LayoutState;
use crate::domain::models::Route;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::Instant;

pub mod palette;

pub use palette::PaletteState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating the dashboard.
    Normal,
    /// The command palette owns the keyboard.
    Palette,
}

#[derive(Debug, Clone)]
pub struct AppState {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Navigation Shell ---
    pub route: Route,
    pub layout: LayoutState,
    pub palette: Option<PaletteState>,
    pub registry: Arc<CommandRegistry>,

    // --- Status Line ---
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub last_error: Option<String>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState {
    #[must_use]
    pub fn is_palette_open(&self) -> bool {
        self.palette.is_some()
    }

    #[must_use]
    pub fn new(config: &ShellConfig, viewport_width: u16) -> Self {
        Self {
            layout: LayoutState::new(viewport_width, config.sidebar.default_width),
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    /// Swap in the host application's command list.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<CommandRegistry>) -> Self {
        self.registry = registry;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = ShellConfig::default();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            route: Route::Dashboard,
            layout: LayoutState::new(1280, config.sidebar.default_width),
            palette: None,
            registry: Arc::new(default_registry()),
            status_message: None,
            status_clear_time: None,
            last_error: None,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            frame_count: 0,
        }
    }
}
