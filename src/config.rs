//! Window and render settings.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "width": 1280, "height": 720, "log_level": "debug" }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "learnogl.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Background color used by tutorials that do not pick their own.
    pub clear_color: [f32; 4],
    pub vsync: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            vsync: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads `learnogl.json` from the working directory, falling back to
    /// `learnogl/config.json` in the user config directory, then to defaults.
    pub fn load() -> Result<Self, AppError> {
        for path in Self::search_paths() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("learnogl").join("config.json"));
        }
        paths
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&text).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses config JSON.
    pub fn parse(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// The configured log level, `Info` when unrecognized.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(r#"{ "width": 1280, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 600);
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert!(config.vsync);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("{ \"width\": \"wide\" }").is_err());
        assert!(Config::parse("not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_default_aspect_ratio() {
        assert!((Config::default().aspect_ratio() - 4.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_file_reports_path() {
        let path = std::env::temp_dir().join(format!("learnogl-config-{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2").unwrap();
        match Config::from_file(&path) {
            Err(AppError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
        std::fs::remove_file(&path).unwrap();
    }
}
