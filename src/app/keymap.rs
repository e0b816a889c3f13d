use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Binding overrides, e.g. `"ctrl+p" = "open_palette"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Process-wide shortcut table, active for the shell's mounted lifetime.
/// Mode-scoped handling (the palette owning its own keys) lives in the
/// input mapper, which consults this table last.
#[derive(Debug)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(ctrl('k'), Action::OpenPalette);
        global.insert(ctrl('b'), Action::ToggleSidebar);
        // Terminals deliver Cmd as SUPER on the platforms that forward it.
        global.insert(with_mods('k', KeyModifiers::SUPER), Action::OpenPalette);
        global.insert(with_mods('b', KeyModifiers::SUPER), Action::ToggleSidebar);
        global.insert(key(KeyCode::Esc), Action::CloseMobileOverlay);
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                if let (Some(event), Some(action)) = (parse_key_spec(spec), parse_action(name)) {
                    global.insert(event, action);
                }
            }
        }

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    with_mods(c, KeyModifiers::CONTROL)
}

fn with_mods(c: char, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), modifiers)
}

/// Parse `"ctrl+k"`-style binding specs. Unknown specs are skipped so a
/// stale config line never takes the shell down.
fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;
    for part in spec.split('+') {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            "cmd" | "super" => modifiers.insert(KeyModifiers::SUPER),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "enter" => code = Some(KeyCode::Enter),
            "tab" => code = Some(KeyCode::Tab),
            "space" => code = Some(KeyCode::Char(' ')),
            single if single.chars().count() == 1 => {
                code = single.chars().next().map(KeyCode::Char);
            }
            _ => return None,
        }
    }
    code.map(|code| KeyEvent::new(code, modifiers))
}

fn parse_action(name: &str) -> Option<Action> {
    match name {
        "open_palette" => Some(Action::OpenPalette),
        "toggle_sidebar" => Some(Action::ToggleSidebar),
        "close_overlay" => Some(Action::CloseMobileOverlay),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}
