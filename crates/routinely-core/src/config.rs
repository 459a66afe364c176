//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Countdown tick interval
//! - Defaults for the routine creation form
//! - Whether demo data is seeded on start
//!
//! Configuration is read from `~/.config/routinely/config.toml`. It is never
//! written back; routines and emotion entries are not persisted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::routine::RoutineIcon;

/// Countdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Delay between ticks in milliseconds. One tick always removes one
    /// second from the countdown; shortening this speeds runs up.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Defaults pre-filled into the routine creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineDefaults {
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    #[serde(default)]
    pub default_icon: RoutineIcon,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub routines: RoutineDefaults,
}

fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_duration_minutes() -> u32 {
    60
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for RoutineDefaults {
    fn default() -> Self {
        Self {
            default_duration_minutes: default_duration_minutes(),
            default_icon: RoutineIcon::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            timer: TimerConfig::default(),
            routines: RoutineDefaults::default(),
        }
    }
}

/// Returns `~/.config/routinely[-dev]/` based on ROUTINELY_ENV.
///
/// Set ROUTINELY_ENV=dev to use the development directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("ROUTINELY_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("routinely-dev")
    } else {
        base_dir.join("routinely")
    })
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timer.tick_interval_ms".into(),
                message: "must be greater than zero".into(),
            });
        }
        if self.routines.default_duration_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "routines.default_duration_minutes".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.timer.tick_interval_ms)
    }
}
