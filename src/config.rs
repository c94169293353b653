/// Application configuration
///
/// Loaded once at startup from a JSON file in the user config directory.
/// A missing file gets created with defaults so the user has something to
/// edit; an unreadable or invalid file falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::map::MapProvider;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Which static map provider renders coordinate previews
    pub map_provider: MapProvider,
    /// Zoom level for map previews
    pub map_zoom: u8,
    /// API key for the Google provider. It lives only in the user's local
    /// config file; the OpenStreetMap provider needs none.
    pub google_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_provider: MapProvider::OpenStreetMap,
            map_zoom: 14,
            google_api_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Get the path where the config file is stored
    /// Returns ~/.config/geolog/config.json on Linux
    fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(|| dirs::home_dir())?;

        path.push("geolog");
        path.push("config.json");
        Some(path)
    }

    /// Load the configuration, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            eprintln!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    println!("📁 Config loaded from: {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("⚠️  Invalid config ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                // First run: write the defaults so the user has a file to edit
                let config = Self::default();
                config.write_to(&path);
                config
            }
        }
    }

    fn write_to(&self, path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        if fs::create_dir_all(parent).is_err() {
            return;
        }

        if let Ok(json) = serde_json::to_string_pretty(self) {
            if fs::write(path, json).is_ok() {
                println!("📁 Wrote default config to: {}", path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pick_the_keyless_provider() {
        let config = AppConfig::default();

        assert_eq!(config.map_provider, MapProvider::OpenStreetMap);
        assert_eq!(config.map_zoom, 14);
        assert!(config.google_api_key.is_empty());
    }

    #[test]
    fn test_partial_file_fills_missing_fields_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"map_zoom": 16}"#).unwrap();

        assert_eq!(config.map_zoom, 16);
        assert_eq!(config.map_provider, MapProvider::OpenStreetMap);
    }

    #[test]
    fn test_provider_round_trip() {
        let config = AppConfig {
            map_provider: MapProvider::GoogleMaps,
            map_zoom: 12,
            google_api_key: "abc123".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
