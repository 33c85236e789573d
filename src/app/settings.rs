use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::AppError;

const MIN_FONT_SIZE: i32 = 6;
const MAX_FONT_SIZE: i32 = 96;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_word_list_path")]
    pub word_list_path: PathBuf,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_font_size() -> u32 {
    14
}

fn default_word_list_path() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    400
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            word_list_path: default_word_list_path(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`.
    ///
    /// Only a missing file gets the defaults written back. An unreadable or
    /// corrupt file is left alone and the defaults are used for this run.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::warn!("Failed to write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                log::warn!("Failed to read settings {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    fn from_json(contents: &str) -> Self {
        match serde_json::from_str(contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Text size for the editor widget, kept within a usable range.
    pub fn text_size(&self) -> i32 {
        i32::try_from(self.font_size)
            .unwrap_or(MAX_FONT_SIZE)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("nutpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.word_list_path, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 400);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            font_size: 18,
            word_list_path: PathBuf::from("/opt/words.txt"),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"word_list_path": "/home/me/words"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.word_list_path, PathBuf::from("/home/me/words"));
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let settings = AppSettings::from_json("{ not json");
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nutpad").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());

        let written: AppSettings = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, AppSettings::default());
    }

    #[test]
    fn test_unreadable_file_is_not_overwritten() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, [0xffu8, 0xfe]).unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe]);
    }

    #[test]
    fn test_corrupt_json_file_is_not_overwritten() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"font_size\": ").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"font_size\": ");
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            font_size: 20,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_text_size_is_clamped() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.text_size(), 14);
        settings.font_size = 0;
        assert_eq!(settings.text_size(), MIN_FONT_SIZE);
        settings.font_size = u32::MAX;
        assert_eq!(settings.text_size(), MAX_FONT_SIZE);
        settings.font_size = 3_000_000_000;
        assert_eq!(settings.text_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = AppSettings::get_config_path();
        assert!(path.ends_with("nutpad/settings.json"));
    }
}
