//! Server configuration, loaded from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gravity_core::constants::{BROADCAST_RATE, TICK_RATE};
use gravity_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to run a server. Missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub sim: SimConfig,
    /// Simulation steps per second.
    pub tick_rate: u32,
    /// Snapshots published per second.
    pub broadcast_rate: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            broadcast_rate: BROADCAST_RATE,
        }
    }
}

impl ServerConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        if self.broadcast_rate == 0 || self.broadcast_rate > self.tick_rate {
            return Err(ConfigError::Invalid(format!(
                "broadcast_rate must be between 1 and tick_rate ({}), got {}",
                self.tick_rate, self.broadcast_rate
            )));
        }
        let bounds = &self.sim.bounds;
        let finite = [bounds.x, bounds.y, bounds.width, bounds.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bounds must be finite with positive size, got {bounds:?}"
            )));
        }
        Ok(())
    }

    /// Length of one simulation step.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate as u64)
    }

    /// Ticks between published snapshots.
    pub fn broadcast_every(&self) -> u64 {
        (self.tick_rate / self.broadcast_rate).max(1) as u64
    }
}
