//! Configuration management for vpn-tray.
//!
//! Loads the TOML configuration file from the platform config directory.
//! The file is optional: a missing file or missing fields fall back to
//! defaults. The tray never writes it back.

use crate::{
    AppError, AppResult,
    config::{IconConfig, ThemeConfig},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const ASSETS_SUBDIR: &str = "assets/menubar-icons";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tray icon artwork and animation settings.
    #[serde(default)]
    pub icon: IconConfig,
    /// System theme watcher settings.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// Returns defaults when no configuration file exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, defaulting if it is absent.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!(config_path = ?config_path, "No config found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::from_toml_str(&contents)?;
        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// A zero `frame_interval_ms` is rejected; the animation timer needs a
    /// non-zero period.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if config.icon.frame_interval_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "icon.frame_interval_ms must be greater than 0".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(config)
    }

    /// Directory holding the per-platform frame images.
    ///
    /// Uses the configured directory, or `assets/menubar-icons` next to the
    /// executable.
    #[track_caller]
    pub fn assets_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.icon.assets_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().ok_or_else(|| AppError::ConfigError {
            reason: format!("Executable has no parent directory: {:?}", exe),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(exe_dir.join(ASSETS_SUBDIR))
    }

    /// Directory for rolling log files, created on demand.
    #[track_caller]
    pub fn log_dir() -> AppResult<PathBuf> {
        let log_dir = Self::project_dirs()?.data_local_dir().join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
            debug!(log_dir = ?log_dir, "Created log directory");
        }

        Ok(log_dir)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "vpn-tray", "VPN-Tray").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
