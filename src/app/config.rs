use super::keymap::KeyConfig;
use super::layout::{clamp_width, DEFAULT_PANEL_WIDTH};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `~/.config/tradedeck/config.toml`. Supplies defaults only; runtime
/// layout changes are never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub keys: KeyConfig,
    pub theme: PaletteType,
    pub sidebar: SidebarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    pub default_width: u16,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tradedeck");
        path.push("config.toml");
        path
    })
}

impl ShellConfig {
    /// Missing or unparsable config falls back to defaults; a broken
    /// config file must not keep the shell from starting.
    #[must_use]
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let mut config = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str::<ShellConfig>(&content).ok())
            .unwrap_or_default();
        config.sidebar.default_width = clamp_width(config.sidebar.default_width);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme = \"nord\"\n\n[sidebar]\ndefault_width = 320\n\n[keys]\nprofile = \"default\"\n"
        )
        .unwrap();
        let config = ShellConfig::load_from(file.path());
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.sidebar.default_width, 320);
    }

    #[test]
    fn width_is_clamped_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sidebar]\ndefault_width = 9000").unwrap();
        let config = ShellConfig::load_from(file.path());
        assert_eq!(config.sidebar.default_width, 400);
    }

    #[test]
    fn bad_or_missing_config_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        assert_eq!(ShellConfig::load_from(file.path()), ShellConfig::default());
        assert_eq!(
            ShellConfig::load_from(Path::new("/nonexistent/config.toml")),
            ShellConfig::default()
        );
    }
}
