//! User preferences module.
//!
//! This module handles loading and saving the persisted preferences the
//! timer and report surfaces are configured from: session and break
//! durations plus the selected theme name.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/focusdeck";

/// Oversees management of the preferences file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for the preferences file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_focus_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new instance with default preferences and no file path.
    ///
    pub fn new() -> Config {
        Config {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Try to load existing preferences from the disk using the custom path
    /// if provided. A missing file is not an error: the defaults stand and
    /// the resolved path is kept so a later save creates the file.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify preferences file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        // If file exists, try to extract the stored preferences
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.focus_minutes = data.focus_minutes;
            self.short_break_minutes = data.short_break_minutes;
            self.long_break_minutes = data.long_break_minutes;
            self.theme_name = data.theme_name;
            debug!("Loaded preferences from {}", file_path.display());
        }

        Ok(())
    }

    /// Save the current preferences to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            focus_minutes: self.focus_minutes,
            short_break_minutes: self.short_break_minutes,
            long_break_minutes: self.long_break_minutes,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the preferences file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_default_preferences() {
        let config = Config::new();
        assert_eq!(config.focus_minutes, 25);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.theme_name, "tokyo-night");
    }

    #[test]
    fn test_save_without_load_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }

    #[test]
    fn test_file_spec_fills_missing_keys_with_defaults() {
        let data: FileSpec = serde_yaml::from_str("focus_minutes: 50").unwrap();
        assert_eq!(data.focus_minutes, 50);
        assert_eq!(data.short_break_minutes, 5);
        assert_eq!(data.long_break_minutes, 15);
        assert_eq!(data.theme_name, "tokyo-night");
    }

    #[test]
    fn test_file_spec_round_trip() {
        let data = FileSpec {
            focus_minutes: 50,
            short_break_minutes: 10,
            long_break_minutes: 30,
            theme_name: "gruvbox".to_string(),
        };
        let content = serde_yaml::to_string(&data).unwrap();
        let parsed: FileSpec = serde_yaml::from_str(&content).unwrap();
        assert_eq!(parsed.focus_minutes, 50);
        assert_eq!(parsed.short_break_minutes, 10);
        assert_eq!(parsed.long_break_minutes, 30);
        assert_eq!(parsed.theme_name, "gruvbox");
    }
}
