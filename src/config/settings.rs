//! Persisted user settings
//!
//! The only setting is the theme preference, stored as an integer
//! (`Light = 0`, `Dark = 1`, `System = 2`) in
//! `<config dir>/calctty/settings.toml`. It is read at startup and written at
//! shutdown.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ConfigError, APP_DIR};

/// Which palette the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the terminal's background
    System,
}

impl ThemePreference {
    /// Decode a stored integer. Unknown values fall back to `Light`.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => ThemePreference::Dark,
            2 => ThemePreference::System,
            _ => ThemePreference::Light,
        }
    }

    pub fn index(self) -> i64 {
        match self {
            ThemePreference::Light => 0,
            ThemePreference::Dark => 1,
            ThemePreference::System => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    theme: i64,
}

impl Settings {
    pub fn theme(&self) -> ThemePreference {
        ThemePreference::from_index(self.theme)
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme.index();
    }

    /// Read settings from `path`. Missing or unreadable files give defaults.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no saved settings");
                return Settings::default();
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<config dir>/calctty/settings.toml`, or `settings.toml` in the working
/// directory when the platform has no config dir
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for theme in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_index(theme.index()), theme);
        }
        assert_eq!(ThemePreference::from_index(9), ThemePreference::Light);
        assert_eq!(ThemePreference::from_index(-1), ThemePreference::Light);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calctty").join("settings.toml");

        let mut settings = Settings::default();
        settings.set_theme(ThemePreference::System);
        settings.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "theme = 2");
        assert_eq!(Settings::load(&path).theme(), ThemePreference::System);
    }

    #[test]
    fn test_missing_or_malformed_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(Settings::load(&path).theme(), ThemePreference::Light);

        fs::write(&path, "theme = \"purple\"").unwrap();
        assert_eq!(Settings::load(&path).theme(), ThemePreference::Light);
    }
}
