//! Main application configuration
//!
//! This module defines the top-level configuration for processes embedding
//! the rating model: rating defaults plus logging setup, loaded from
//! environment variables or embedded TOML text.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rating: RatingConfig,
    pub logging: LoggingSettings,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Include the event target (module path) in output
    pub with_target: bool,
    /// Include source line numbers in output
    pub with_line_number: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
            with_line_number: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, using the environment variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Rating settings
        if let Some(rating) = lookup("ELO_DEFAULT_RATING") {
            config.rating.default_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEFAULT_RATING value: {}", rating))?;
        }
        if let Some(k) = lookup("ELO_K_FACTOR") {
            config.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k))?;
        }
        if let Some(handicap) = lookup("ELO_HANDICAP") {
            config.rating.handicap = handicap
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_HANDICAP value: {}", handicap))?;
        }
        if let Some(verbose) = lookup("ELO_VERBOSE") {
            config.rating.verbose = verbose
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_VERBOSE value: {}", verbose))?;
        }

        // Logging settings
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.logging.level = log_level;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| anyhow!("Invalid TOML configuration: {}", e))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.logging.level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.logging.level)),
    }

    config.rating.validate()
}
