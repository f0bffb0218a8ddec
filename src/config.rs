use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::projector::ProjectionWindow;
use crate::thresholds::ThresholdSet;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9184))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

/// Everything an evaluation needs besides the readings themselves.
///
/// All fields are validated while deserializing, so holding a
/// `MonitorConfig` means every threshold pair is ordered and the
/// projection window is usable.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default)]
    pub thresholds: ThresholdSet,
    #[serde(default)]
    pub projection: ProjectionWindow,
    #[serde(default)]
    pub server: ServerConfig,
}

impl MonitorConfig {
    /// Loads `path` when given, otherwise the per-user config file if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("No config at {}, using built-in thresholds", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "motor-health", "motor-health")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
