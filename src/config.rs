/// Configuration for a search run
///
/// Loaded from an optional TOML file; unset fields fall back to defaults.
/// There is deliberately no environment-variable layer.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of per-commit search jobs running at once
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Deadline for a single commit's search, in seconds
    #[serde(default = "default_job_timeout_secs")]
    pub job_timeout_secs: u64,

    /// Location of the durable result store, relative to the working directory
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn default_job_timeout_secs() -> u64 {
    300
}

fn default_output_path() -> PathBuf {
    PathBuf::from("git-search-results.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            job_timeout_secs: default_job_timeout_secs(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pool_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.job_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "job_timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
