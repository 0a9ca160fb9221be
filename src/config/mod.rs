//! Configuration management
//!
//! This module handles loading, validation, and management of the pricing
//! configuration. Files are YAML (or JSON by extension); `PRICING_*` environment
//! variables override file values.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::services::pricing::FixedCostPolicy;
use crate::services::pricing::quote::is_json;
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| PricingError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .map_err(|e| PricingError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| PricingError::Config(format!("Failed to parse config: {}", e)))?
        };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load with precedence: defaults, then the file if given, then environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.pricing.apply_overrides(|key| env::var(key).ok())?;
        if let Ok(level) = env::var("PRICING_LOG_LEVEL") {
            self.logging.level = Some(level.parse()?);
        }
        Ok(())
    }

    /// Resolved pricing configuration; `policy_override` wins over the file
    pub fn pricing_config(&self, policy_override: Option<FixedCostPolicy>) -> Result<PricingConfig> {
        self.pricing.resolve(policy_override)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.pricing
            .validate()
            .map_err(|e| PricingError::validation(format!("Pricing config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.pricing = self.pricing.merge(other.pricing);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PricingError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PricingError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
