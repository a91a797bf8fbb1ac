#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pkgdash
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pkgdash/config.toml)
//! - Environment variables (`PKGDASH_*`)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use pkgdash_errors::{ConfigError, Error};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub paths: PathConfig,

    #[serde(default)]
    pub daemon: DaemonConfig,
}

/// General dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// URL route the web layer serves package icons under.
    #[serde(default = "default_icons_route")]
    pub icons_route: String,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Application data directory (icon cache and friends).
    pub data_path: Option<PathBuf>,
}

/// Package daemon connection configuration, consumed by whichever
/// daemon adapter the embedder wires in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,
    #[serde(default = "default_timeout")]
    pub timeout: u64, // seconds
    #[serde(default = "default_retries")]
    pub retries: u32,
}

// Default implementations

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            icons_route: default_icons_route(),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            timeout: default_timeout(),
            retries: default_retries(),
        }
    }
}

// Default value functions for serde

fn default_icons_route() -> String {
    "/icons".to_string()
}

fn default_socket_path() -> PathBuf {
    PathBuf::from("/run/pkgd.socket")
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("pkgdash").join("config.toml"))
    }

    /// The application data directory, falling back to the platform default
    ///
    /// This is the one value read at setup time; the handler derives icon
    /// cache locations from it.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.paths.data_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("/var/lib"))
                .join("pkgdash")
        })
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: &Option<PathBuf>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // PKGDASH_DATA_PATH
        if let Ok(data_path) = std::env::var("PKGDASH_DATA_PATH") {
            if data_path.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "PKGDASH_DATA_PATH".to_string(),
                    value: data_path,
                }
                .into());
            }
            self.paths.data_path = Some(PathBuf::from(data_path));
        }

        // PKGDASH_DAEMON_SOCKET
        if let Ok(socket) = std::env::var("PKGDASH_DAEMON_SOCKET") {
            if socket.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "PKGDASH_DAEMON_SOCKET".to_string(),
                    value: socket,
                }
                .into());
            }
            self.daemon.socket_path = PathBuf::from(socket);
        }

        // PKGDASH_ICONS_ROUTE
        if let Ok(route) = std::env::var("PKGDASH_ICONS_ROUTE") {
            if !route.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: "PKGDASH_ICONS_ROUTE".to_string(),
                    value: route,
                }
                .into());
            }
            self.general.icons_route = route;
        }

        Ok(())
    }
}
