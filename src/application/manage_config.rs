//! Config management use case

use crate::error::{PptvError, Result};
use crate::infrastructure::{Config, Workspace};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "premium_plan_id" => Ok(config.premium_plan_id),
            "latency_ms" => Ok(config.latency_ms.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PptvError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: premium_plan_id, latency_ms, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "premium_plan_id" => {
                if value.trim().is_empty() {
                    return Err(PptvError::Config(
                        "premium_plan_id cannot be empty".to_string(),
                    ));
                }
                config.premium_plan_id = value.trim().to_string();
            }
            "latency_ms" => {
                config.latency_ms = value.trim().parse().map_err(|_| {
                    PptvError::Config(format!(
                        "Invalid latency_ms '{}'. Expected milliseconds as a whole number",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(PptvError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PptvError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: premium_plan_id, latency_ms",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        log::info!("config {} set to {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
