//! Elo arithmetic and the rating calculator
//!
//! This module holds the pure win-probability and rating-delta functions the
//! entity is built on, plus a calculator that applies a shared configuration
//! to both sides of a match.

use crate::error::{EloError, Result};
use crate::rating::entity::RatedEntity;
use crate::types::RatingChange;
use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;
use tracing::debug;

/// Rating points per factor of ten in the odds of winning
pub const ELO_SCALE: f64 = 400.0;

/// Rating given to entities created without one
pub const DEFAULT_RATING: f64 = 1500.0;

/// Default gain factor
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Expected single-game win rate of `rating` against `opponent_rating`.
///
/// A positive `handicap` shifts the gap in favour of the opponent, a
/// negative one in favour of `rating`. The denominator is always >= 1 so the
/// result lies in (0, 1) for finite inputs.
pub fn win_probability(rating: f64, opponent_rating: f64, handicap: f64) -> f64 {
    1.0 / (10f64.powf((opponent_rating - rating + handicap) / ELO_SCALE) + 1.0)
}

/// Rating adjustment for observing `n_wins` out of `n_games` when
/// `expected` was the predicted per-game win rate.
///
/// No division by `n_games` happens, so an empty batch is well defined.
pub fn rating_delta(expected: f64, n_wins: f64, n_games: f64, k_factor: f64) -> f64 {
    k_factor * (n_wins - n_games * expected)
}

/// Extended configuration for Elo updates
/// This wraps the skillratings EloConfig with a handicap term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEloConfig {
    /// Core Elo parameters (`k` is the gain factor)
    pub elo_config: EloConfig,
    /// Additive correction to the rating gap, positive favours the opponent
    pub handicap: f64,
}

impl Default for ExtendedEloConfig {
    fn default() -> Self {
        Self {
            elo_config: EloConfig {
                k: DEFAULT_K_FACTOR,
            },
            handicap: 0.0,
        }
    }
}

impl ExtendedEloConfig {
    /// Create configuration with the given gain factor and handicap
    pub fn new(k_factor: f64, handicap: f64) -> Self {
        Self {
            elo_config: EloConfig { k: k_factor },
            handicap,
        }
    }

    /// Slower, more stable convergence
    pub fn conservative() -> Self {
        Self::new(DEFAULT_K_FACTOR / 2.0, 0.0)
    }

    /// Faster but noisier convergence
    pub fn aggressive() -> Self {
        Self::new(DEFAULT_K_FACTOR * 2.0, 0.0)
    }

    pub fn k_factor(&self) -> f64 {
        self.elo_config.k
    }

    /// Same configuration with a different handicap
    pub fn with_handicap(mut self, handicap: f64) -> Self {
        self.handicap = handicap;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.elo_config.k.is_finite() || self.elo_config.k <= 0.0 {
            return Err(EloError::ConfigurationError {
                message: format!("K factor must be positive, got {}", self.elo_config.k),
            }
            .into());
        }

        if !self.handicap.is_finite() {
            return Err(EloError::ConfigurationError {
                message: format!("Handicap must be finite, got {}", self.handicap),
            }
            .into());
        }

        Ok(())
    }
}

/// Applies one shared configuration to rating updates
#[derive(Debug, Clone)]
pub struct EloCalculator {
    config: ExtendedEloConfig,
}

impl Default for EloCalculator {
    fn default() -> Self {
        Self {
            config: ExtendedEloConfig::default(),
        }
    }
}

impl EloCalculator {
    /// Create a new calculator, rejecting invalid configuration
    pub fn new(config: ExtendedEloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn settings(&self) -> &ExtendedEloConfig {
        &self.config
    }

    /// Expected win rate of `entity` against `opponent` under the configured handicap
    pub fn expected_score(&self, entity: &RatedEntity, opponent: &RatedEntity) -> f64 {
        entity.win_probability(opponent, self.config.handicap)
    }

    /// One-sided update of `entity`, leaving `opponent` untouched
    pub fn update(
        &self,
        entity: &mut RatedEntity,
        opponent: &RatedEntity,
        n_wins: f64,
        n_games: f64,
    ) -> Result<RatingChange> {
        entity.update_with_config(opponent, n_wins, n_games, &self.config)
    }

    /// Update both sides of a match from the same pre-match snapshot.
    ///
    /// `a_wins` is credited to `a` out of `n_games`; `b` is credited the
    /// remainder and sees the handicap mirrored. Both deltas are computed
    /// before either entity is mutated, and neither is mutated if either
    /// update is rejected.
    pub fn update_pair(
        &self,
        a: &mut RatedEntity,
        b: &mut RatedEntity,
        a_wins: f64,
        n_games: f64,
    ) -> Result<(RatingChange, RatingChange)> {
        let b_wins = n_games - a_wins;

        // a and b stay untouched until both updates succeed
        let mut a_next = a.clone();
        let mut b_next = b.clone();
        let a_change = a_next.update_rating(
            b,
            a_wins,
            n_games,
            self.config.handicap,
            self.config.k_factor(),
        )?;
        let b_change = b_next.update_rating(
            a,
            b_wins,
            n_games,
            -self.config.handicap,
            self.config.k_factor(),
        )?;

        debug!(
            a = %a_change.name,
            b = %b_change.name,
            a_delta = a_change.delta(),
            b_delta = b_change.delta(),
            "Applied paired rating update"
        );

        *a = a_next;
        *b = b_next;
        Ok((a_change, b_change))
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Update configuration from JSON
    pub fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: ExtendedEloConfig =
            serde_json::from_value(config).map_err(|e| EloError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
