//! Application configuration.
//!
//! The configuration file is read-only: nothing the dashboard does at runtime
//! (including the theme toggle) is ever written back.

use crate::consts::cli_consts::{self, animation};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`].
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Animation timings, all in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    /// When false, every animation is reported as finished immediately.
    pub enabled: bool,
    pub ring_ms: u64,
    pub bar_ms: u64,
    pub entrance_ms: u64,
    pub stagger_ms: u64,
    pub theme_fade_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ring_ms: animation::RING_MS,
            bar_ms: animation::BAR_MS,
            entrance_ms: animation::ENTRANCE_MS,
            stagger_ms: animation::STAGGER_MS,
            theme_fade_ms: animation::THEME_FADE_MS,
        }
    }
}

impl AnimationConfig {
    pub fn ring(&self) -> Duration {
        Duration::from_millis(self.ring_ms)
    }

    pub fn bar(&self) -> Duration {
        Duration::from_millis(self.bar_ms)
    }

    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn theme_fade(&self) -> Duration {
        Duration::from_millis(self.theme_fade_ms)
    }

    /// Time after mount at which every entrance animation has settled.
    pub fn settle_time(&self) -> Duration {
        // Four staggered tiles/rows is the longest chain on the page.
        let staggered = self.stagger() * 3 + self.entrance();
        self.ring().max(self.bar()).max(staggered)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Paint the page background with the theme colour.
    pub with_background_color: bool,
    /// Redraw interval of the interactive dashboard.
    pub tick_rate_ms: u64,
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_background_color: true,
            tick_rate_ms: cli_consts::TICK_RATE_MS,
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&buf).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the configuration to use for this run.
    ///
    /// An explicit path must exist and parse. Without one, the per-user file
    /// is used when present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// `~/.security-dashboard/config.json`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(cli_consts::CONFIG_DIR).join(cli_consts::CONFIG_FILE))
}
