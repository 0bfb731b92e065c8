//! Settings file save/load operations

use bevy::prelude::Res;
use blockmap_core::EditorSettings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::Session;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum PreferencesError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoConfigDir,
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::IoError(e) => write!(f, "IO error: {}", e),
            PreferencesError::ParseError(e) => write!(f, "Parse error: {}", e),
            PreferencesError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            PreferencesError::NoConfigDir => write!(f, "Could not determine config directory"),
        }
    }
}

impl std::error::Error for PreferencesError {}

/// Get the config directory path for the editor
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "blockmap", "blockmap_editor")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the settings file path
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Load settings, returning defaults if the file is missing or unreadable
pub fn load_settings() -> EditorSettings {
    let loaded = settings_path()
        .ok_or(PreferencesError::NoConfigDir)
        .and_then(|path| load_settings_from(&path));

    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            bevy::log::warn!("Could not load settings: {}. Using defaults.", e);
            EditorSettings::default()
        }
    }
}

/// Load settings from a specific file; a missing file yields defaults
pub fn load_settings_from(path: &Path) -> Result<EditorSettings, PreferencesError> {
    if !path.exists() {
        return Ok(EditorSettings::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| PreferencesError::IoError(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| PreferencesError::ParseError(e.to_string()))
}

/// Save settings to the config directory
pub fn save_settings(settings: &EditorSettings) -> Result<(), PreferencesError> {
    let path = settings_path().ok_or(PreferencesError::NoConfigDir)?;
    save_settings_to(settings, &path)?;
    bevy::log::info!("Saved settings to {:?}", path);
    Ok(())
}

/// Write the session's settings out on first run so there is a file to edit
pub fn write_default_settings(session: Res<Session>) {
    let Some(path) = settings_path() else { return };
    if path.exists() {
        return;
    }
    if let Err(e) = save_settings(&session.settings) {
        bevy::log::warn!("Could not write default settings: {}", e);
    }
}

pub fn save_settings_to(settings: &EditorSettings, path: &Path) -> Result<(), PreferencesError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| PreferencesError::IoError(e.to_string()))?;
    }

    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| PreferencesError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| PreferencesError::IoError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = EditorSettings::default();
        settings.world_size = (64, 64);
        settings.show_grid = false;
        save_settings_to(&settings, &path).unwrap();

        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(PreferencesError::ParseError(_))
        ));
    }
}
