//! Configuration for roster reports
//!
//! Loaded from TOML. Every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! log_level = "info"
//! execution = "parallel"
//!
//! [salary]
//! base_rate = 75000.0
//! bonus_multiplier = 1.2
//! tenure_threshold = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::payroll::SalaryPolicy;
use crate::pipeline::ExecutionMode;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Logging level used when no `-v` flag is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub execution: ExecutionMode,

    #[serde(default)]
    pub salary: SalaryPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            execution: ExecutionMode::default(),
            salary: SalaryPolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(RosterError::Config(format!(
                "log_level must be one of {}, got '{}'",
                VALID_LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        self.salary.validate()
    }
}
