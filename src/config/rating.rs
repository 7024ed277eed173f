//! Rating system configuration

use crate::error::{EloError, Result};
use crate::rating::calculator::{ExtendedEloConfig, DEFAULT_K_FACTOR, DEFAULT_RATING};
use serde::{Deserialize, Serialize};

/// Defaults applied to new entities and their updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Starting rating for entities created from this config
    pub default_rating: f64,
    /// Update gain factor
    pub k_factor: f64,
    /// Handicap applied to every update, positive favours the opponent
    pub handicap: f64,
    /// Emit diagnostic events during updates
    pub verbose: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_RATING,
            k_factor: DEFAULT_K_FACTOR,
            handicap: 0.0,
            verbose: false,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.default_rating.is_finite() {
            return Err(EloError::ConfigurationError {
                message: format!("Default rating must be finite, got {}", self.default_rating),
            }
            .into());
        }

        self.elo_config().validate()
    }

    /// Update parameters in the form the calculator takes
    pub fn elo_config(&self) -> ExtendedEloConfig {
        ExtendedEloConfig::new(self.k_factor, self.handicap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_config_default() {
        let config = RatingConfig::default();
        assert_eq!(config.default_rating, 1500.0);
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.handicap, 0.0);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rating_config_validation() {
        let mut config = RatingConfig::default();
        config.default_rating = f64::NAN;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.k_factor = -32.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_elo_config_conversion() {
        let config = RatingConfig {
            k_factor: 24.0,
            handicap: -35.0,
            ..RatingConfig::default()
        };
        let elo = config.elo_config();
        assert_eq!(elo.k_factor(), 24.0);
        assert_eq!(elo.handicap, -35.0);
    }
}
