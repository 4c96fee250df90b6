// Settings module
// User-tunable geometry, theme and refresh cadence loaded from config.toml

use serde::{Deserialize, Serialize};

use crate::models::geometry::{GeometryConfig, GeometryError};

/// Shortest allowed repaint cadence for the current-time indicator.
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// How often the schedule page repaints so the time indicator moves.
    pub refresh_interval_secs: u64,
    pub geometry: GeometryConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Light,
            refresh_interval_secs: 60,
            geometry: GeometryConfig::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_interval_secs < MIN_REFRESH_INTERVAL_SECS {
            return Err(format!(
                "refresh_interval_secs must be at least {}",
                MIN_REFRESH_INTERVAL_SECS
            ));
        }
        self.geometry
            .validate()
            .map_err(|e: GeometryError| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let settings = Settings {
            refresh_interval_secs: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.refresh_interval_secs, 60);
        assert_eq!(settings.geometry, GeometryConfig::default());
    }

    #[test]
    fn test_partial_geometry_table() {
        let settings: Settings = toml::from_str(
            "[geometry]\nslot_height = 90.0\n",
        )
        .unwrap();
        assert_eq!(settings.geometry.slot_height, 90.0);
        assert_eq!(settings.geometry.day_header_height, 40.0);
    }
}
