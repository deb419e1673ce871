//! Game configuration.
//!
//! Loaded once at startup from a TOML file and treated as read-only by the
//! race core.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the HUD renders a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// 12.34
    Seconds,
    /// 1:23
    MinutesSeconds,
    /// 1:23.45 (default)
    #[default]
    MinutesSecondsMillis,
}

/// Read-only game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// If enabled, the race starts after a countdown.
    pub countdown_enabled: bool,
    /// Countdown duration in seconds. Only used if `countdown_enabled`.
    pub countdown_seconds: f32,
    /// Save key for the best time (lower is better).
    pub best_time_save_key: String,
    /// HUD time format.
    pub time_format: TimeFormat,
    /// How many millisecond digits the HUD shows (1..=3).
    pub millisecond_digits: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_enabled: true,
            countdown_seconds: 3.0,
            best_time_save_key: "BEST_TIME_SECONDS".to_string(),
            time_format: TimeFormat::default(),
            millisecond_digits: 2,
        }
    }
}

impl GameConfig {
    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.countdown_seconds.is_finite() || self.countdown_seconds < 0.0 {
            return Err(ConfigError::InvalidValue(
                "countdown_seconds must be finite and >= 0",
            ));
        }

        if self.best_time_save_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "best_time_save_key must not be empty",
            ));
        }

        if !(1..=3).contains(&self.millisecond_digits) {
            return Err(ConfigError::InvalidValue(
                "millisecond_digits must be between 1 and 3",
            ));
        }

        Ok(())
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "timetrial", "TimeTrial")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load game configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        return Ok(GameConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: GameConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.validate()?;

    Ok(config)
}

/// Save game configuration to file.
pub fn save_config(config: &GameConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid config: {0}")]
    InvalidValue(&'static str),
}
