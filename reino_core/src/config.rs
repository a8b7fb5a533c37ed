//! Persisted kiosk settings.
//!
//! A single pretty-printed JSON file under the home directory. Missing
//! or corrupt files silently fall back to defaults; the kiosk must come
//! up looking right even with a wiped profile.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".reino";
const SETTINGS_FILE: &str = "settings.json";

/// How the install's primary pointing device is classified.
///
/// The desktop stand-in for the coarse-pointer media query: touchscreen
/// kiosks set `Coarse`, which suppresses pointer parallax, dims
/// connection lines and mutes hover chimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Fine,
    Coarse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub pointer: PointerKind,
    /// Master switch for the background canvases. Off means the
    /// starfield and particles render nothing and skip their tick work.
    pub ambient_effects: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            sound_enabled: true,
            pointer: PointerKind::Fine,
            ambient_effects: true,
        }
    }
}

impl Settings {
    pub fn is_coarse_pointer(&self) -> bool {
        self.pointer == PointerKind::Coarse
    }

    /// Default on-disk location, `~/.reino/settings.json`.
    pub fn default_path() -> CoreResult<PathBuf> {
        let home = dirs::home_dir().ok_or(CoreError::NoHome)?;
        Ok(home.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Loads from the default location, falling back to defaults.
    pub fn load() -> Settings {
        match Settings::default_path() {
            Ok(path) => Settings::load_from(&path),
            Err(_) => Settings::default(),
        }
    }

    /// Loads from an explicit path. Any failure yields defaults; a
    /// kiosk never refuses to start over a bad settings file.
    pub fn load_from(path: &Path) -> Settings {
        let Ok(raw) = fs::read_to_string(path) else {
            return Settings::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("ignoring corrupt settings file: {err}");
                Settings::default()
            }
        }
    }

    /// Saves to the default location.
    pub fn save(&self) -> CoreResult<()> {
        self.save_to(&Settings::default_path()?)
    }

    /// Saves to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_settings_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            sound_enabled: false,
            pointer: PointerKind::Coarse,
            ambient_effects: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded, Settings::default());
        assert!(loaded.sound_enabled);
        assert!(!loaded.is_coarse_pointer());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "sound_enabled": false }"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert!(!loaded.sound_enabled);
        assert_eq!(loaded.pointer, PointerKind::Fine);
        assert!(loaded.ambient_effects);
    }

    #[test]
    fn test_settings_serialize_pretty_and_lowercase() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            pointer: PointerKind::Coarse,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"coarse\""));
        assert!(raw.contains('\n'), "expected pretty-printed output");
    }
}
