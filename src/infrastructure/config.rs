//! Configuration management

use crate::error::{PptvError, Result};
use crate::infrastructure::ConnectionConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the simulated network latency
pub const LATENCY_ENV: &str = "PPTV_LATENCY_MS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Plan id that unlocks premium channels
    #[serde(default = "default_premium_plan_id")]
    pub premium_plan_id: String,
    /// Pause before login and registration resolve
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default)]
    pub remote: ConnectionConfig,
    pub created: DateTime<Utc>,
}

fn default_premium_plan_id() -> String {
    "premium".to_string()
}

fn default_latency_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            premium_plan_id: default_premium_plan_id(),
            latency_ms: default_latency_ms(),
            remote: ConnectionConfig::default(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .pptv/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".pptv").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PptvError::NotPptvDirectory(path.to_path_buf())
            } else {
                PptvError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PptvError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .pptv/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let pptv_dir = path.join(".pptv");
        let config_path = pptv_dir.join("config.toml");

        if !pptv_dir.exists() {
            fs::create_dir(&pptv_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Simulated latency, with the environment variable taking precedence
    pub fn latency(&self) -> Duration {
        let ms = std::env::var(LATENCY_ENV)
            .ok()
            .and_then(|value| parse_latency_override(&value))
            .unwrap_or(self.latency_ms);
        Duration::from_millis(ms)
    }
}

/// Milliseconds from the latency override; unparsable values are ignored with a warning
fn parse_latency_override(value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(_) => {
            log::warn!(
                "ignoring {}='{}': expected milliseconds as a whole number",
                LATENCY_ENV,
                value
            );
            None
        }
    }
}
