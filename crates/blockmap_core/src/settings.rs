//! Editor settings
//!
//! All fields have defaults, so a settings file only needs the values it
//! wants to change.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Camera tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Scale change per scroll-wheel notch
    pub mouse_zoom_step: f32,
    /// Scale change per tick while a zoom key is held
    pub key_zoom_step: f32,
    /// Screen pixels panned per tick while a pan key is held
    pub key_pan_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            zoom_min: 0.2,
            zoom_max: 2.0,
            mouse_zoom_step: 0.1,
            key_zoom_step: 0.02,
            key_pan_speed: 10.0,
        }
    }
}

/// Settings for one editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid size in cells (width, height)
    pub world_size: (u32, u32),
    /// Cell side length in world units
    pub cell_size: u32,
    /// Window size in pixels
    pub screen_size: (u32, u32),
    pub camera: CameraSettings,
    /// Map file opened at startup and written on save
    pub save_path: PathBuf,
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    InvalidZoomRange { min: f32, max: f32 },
    ZeroCellSize,
    WorldTooLarge { width: u32, height: u32 },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidZoomRange { min, max } => write!(
                f,
                "Invalid zoom range {}..{}: need 0 < zoom_min <= zoom_max",
                min, max
            ),
            SettingsError::ZeroCellSize => write!(f, "cell_size must be greater than 0"),
            SettingsError::WorldTooLarge { width, height } => {
                write!(f, "World of {}x{} cells is too large", width, height)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl EditorSettings {
    /// Reject values the editor cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let CameraSettings {
            zoom_min, zoom_max, ..
        } = self.camera;
        // Written so NaN fails too
        if !(zoom_min > 0.0 && zoom_min <= zoom_max && zoom_max.is_finite()) {
            return Err(SettingsError::InvalidZoomRange {
                min: zoom_min,
                max: zoom_max,
            });
        }
        if self.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        let (width, height) = self.world_size;
        if width
            .checked_mul(height)
            .and_then(|cells| usize::try_from(cells).ok())
            .is_none()
        {
            return Err(SettingsError::WorldTooLarge { width, height });
        }
        Ok(())
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            world_size: (32, 32),
            cell_size: 50,
            screen_size: (800, 600),
            camera: CameraSettings::default(),
            save_path: PathBuf::from("saves/world_editor_save1.csv"),
            show_grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!(settings.world_size, (32, 32));
        assert_eq!(settings.cell_size, 50);
        assert_eq!(settings.camera.zoom_min, 0.2);
        assert_eq!(settings.camera.zoom_max, 2.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "world_size": [64, 48], "camera": { "zoom_max": 4.0 } }"#;
        let settings: EditorSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.world_size, (64, 48));
        assert_eq!(settings.cell_size, 50);
        assert_eq!(settings.camera.zoom_max, 4.0);
        assert_eq!(settings.camera.zoom_min, 0.2);
        assert_eq!(settings.save_path, PathBuf::from("saves/world_editor_save1.csv"));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(EditorSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_inverted_zoom_range() {
        let json = r#"{ "camera": { "zoom_min": 3.0, "zoom_max": 0.5 } }"#;
        let settings: EditorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidZoomRange { min: 3.0, max: 0.5 })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_zoom_min() {
        let mut settings = EditorSettings::default();
        settings.camera.zoom_min = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidZoomRange { .. })
        ));

        settings.camera.zoom_min = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidZoomRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let mut settings = EditorSettings::default();
        settings.cell_size = 0;
        assert_eq!(settings.validate(), Err(SettingsError::ZeroCellSize));
    }

    #[test]
    fn test_validate_rejects_overflowing_world() {
        let json = r#"{ "world_size": [70000, 70000] }"#;
        let settings: EditorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::WorldTooLarge {
                width: 70000,
                height: 70000
            })
        );
    }
}
