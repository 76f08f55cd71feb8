//! Application configuration
//! Optional TOML overrides for the input path, window geometry and plot style.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory.
pub const CONFIG_FILE: &str = "mpu_plot.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub window: WindowConfig,
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub csv_path: PathBuf,
}

/// Size of each chart window, in logical pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub line_width: f32,
    pub grid_alpha: f32,
    pub title_size: f32,
    pub axis_label_size: f32,
    pub legend_size: f32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("ArquivosDados/mpu_data.csv"),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            grid_alpha: 0.7,
            title_size: 16.0,
            axis_label_size: 12.0,
            legend_size: 10.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let config = AppConfig::load("no/such/mpu_plot.toml").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.data.csv_path,
            PathBuf::from("ArquivosDados/mpu_data.csv")
        );
        assert_eq!(config.plot.line_width, 1.5);
    }

    #[test]
    fn partial_file_overrides_named_keys_only() {
        let config = AppConfig::from_toml(
            r#"
            [data]
            csv_path = "capture/run2.csv"

            [plot]
            line_width = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.data.csv_path, PathBuf::from("capture/run2.csv"));
        assert_eq!(config.plot.line_width, 2.0);
        assert_eq!(config.plot.grid_alpha, 0.7);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[window\nwidth = ").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
