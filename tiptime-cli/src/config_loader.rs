//! Persistent CLI Configuration Loader
//!
//! This module provides platform-aware configuration file loading for the
//! tiptime CLI. Configuration is loaded from `~/.config/tiptime/config.toml`
//! on Linux/macOS or `%APPDATA%\tiptime\config.toml` on Windows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Default locale code (e.g., "en-US", "de-DE").
    pub locale: Option<String>,
    /// Tip percentage prefilled in the TUI and used when `--tip` is omitted.
    pub default_tip_percent: Option<Decimal>,
    /// Start with the round-up rule enabled.
    pub round_up: Option<bool>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    /// - Linux: ~/.config/tiptime/
    /// - macOS: ~/Library/Application Support/tiptime/
    /// - Windows: %APPDATA%\tiptime\
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tiptime"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Attempts to load configuration from the default config file location.
    /// Returns `CliConfig::default()` if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Saves the current configuration to the default config file location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(&path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Creates a sample configuration file at the default location.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let sample = CliConfig {
            locale: Some("en-US".to_string()),
            default_tip_percent: Some(Decimal::from(15)),
            round_up: Some(false),
            enable_logging: Some(false),
        };
        sample.save()?;
        Self::config_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })
    }
}
