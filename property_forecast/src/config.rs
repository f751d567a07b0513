//! Projection settings

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Horizon used when none is configured
pub const DEFAULT_YEARS_FORWARD: usize = 5;

/// Settings for a single property projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Number of future years to project
    pub years_forward: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years_forward: DEFAULT_YEARS_FORWARD,
        }
    }
}

impl ProjectionConfig {
    /// Create a validated config for the given horizon
    pub fn new(years_forward: usize) -> Result<Self> {
        let config = Self { years_forward };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ForecastError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.years_forward == 0 {
            return Err(ForecastError::InvalidInput(
                "years_forward must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
