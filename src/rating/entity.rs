//! Rated entity
//!
//! A named competitor carrying a single Elo rating. The rating is only ever
//! changed by [`RatedEntity::update_rating`] (or the helpers that delegate to
//! it), and it is always finite.

use crate::config::RatingConfig;
use crate::error::{EloError, Result};
use crate::rating::calculator::{self, ExtendedEloConfig, DEFAULT_RATING};
use crate::types::{EntityId, MatchTally, RatingChange};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;
use std::cmp::Ordering;
use std::fmt;
use tracing::info;

/// A named competitor with an Elo rating
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord")]
pub struct RatedEntity {
    name: EntityId,
    rating: f64,
    verbose: bool,
}

/// Unchecked serialized form, validated on the way into [`RatedEntity`]
#[derive(Deserialize)]
struct EntityRecord {
    name: EntityId,
    rating: f64,
    #[serde(default)]
    verbose: bool,
}

impl TryFrom<EntityRecord> for RatedEntity {
    type Error = EloError;

    fn try_from(record: EntityRecord) -> std::result::Result<Self, Self::Error> {
        check_rating(&record.name, record.rating)?;

        Ok(Self {
            name: record.name,
            rating: record.rating,
            verbose: record.verbose,
        })
    }
}

impl RatedEntity {
    /// Create an entity with the default rating of 1500
    pub fn new(name: impl Into<EntityId>) -> Self {
        Self {
            name: name.into(),
            rating: DEFAULT_RATING,
            verbose: false,
        }
    }

    /// Create an entity with an explicit starting rating
    pub fn with_rating(name: impl Into<EntityId>, rating: f64) -> Result<Self> {
        let name = name.into();
        check_rating(&name, rating)?;

        Ok(Self {
            name,
            rating,
            verbose: false,
        })
    }

    /// Create an entity using the configured default rating and verbosity
    pub fn from_config(name: impl Into<EntityId>, config: &RatingConfig) -> Result<Self> {
        Ok(Self::with_rating(name, config.default_rating)?.verbose(config.verbose))
    }

    /// Toggle diagnostic events during rating updates
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Compare by rating alone; the name plays no part.
    ///
    /// Equal ratings are a tie (`Ordering::Equal`), which says nothing about
    /// the two entities being the same competitor.
    pub fn cmp_rating(&self, other: &RatedEntity) -> Option<Ordering> {
        self.rating.partial_cmp(&other.rating)
    }

    pub fn is_rated_below(&self, other: &RatedEntity) -> bool {
        self.rating < other.rating
    }

    pub fn is_rated_above(&self, other: &RatedEntity) -> bool {
        self.rating > other.rating
    }

    /// Expected probability of winning a single game against `other`.
    ///
    /// Positive `handicap` favours `other`, negative favours `self`.
    pub fn win_probability(&self, other: &RatedEntity, handicap: f64) -> f64 {
        calculator::win_probability(self.rating, other.rating, handicap)
    }

    /// Expected win rate against `other` with no handicap
    pub fn expected_score(&self, other: &RatedEntity) -> f64 {
        self.win_probability(other, 0.0)
    }

    /// Update this entity's rating from `n_wins` observed out of `n_games`
    /// played against `other`.
    ///
    /// Only `self` changes. For a symmetric update the caller must give each
    /// side the opponent's pre-update rating, e.g. by updating against a
    /// clone or via [`EloCalculator::update_pair`](crate::EloCalculator::update_pair).
    /// Draws count as half a win in `n_wins`.
    pub fn update_rating(
        &mut self,
        other: &RatedEntity,
        n_wins: f64,
        n_games: f64,
        handicap: f64,
        k_factor: f64,
    ) -> Result<RatingChange> {
        validate_match_input(n_wins, n_games, handicap, k_factor)?;

        if self.verbose {
            info!(
                entity = %self.name,
                "Updating rating of {} based on results of the match against {}.",
                self.name,
                other.name
            );
            info!(
                entity = %self.name,
                "rating {}: {} - {}: {}",
                self.name,
                self.rating,
                other.name,
                other.rating
            );
        }

        let expected = self.win_probability(other, handicap);

        if self.verbose {
            info!(entity = %self.name, "Win rate of {}: {}.", self.name, expected);
            info!(entity = %self.name, "The number of games: {}.", n_games);
            info!(entity = %self.name, "The number of {} wins: {}", self.name, n_wins);
        }

        let old_rating = self.rating;
        let new_rating = old_rating + calculator::rating_delta(expected, n_wins, n_games, k_factor);
        check_rating(&self.name, new_rating)?;
        self.rating = new_rating;

        if self.verbose {
            info!(entity = %self.name, "Updated rating of {}.", self.name);
            info!(entity = %self.name, "{:.3} -> {:.3}", old_rating, new_rating);
        }

        Ok(RatingChange {
            name: self.name.clone(),
            opponent: other.name.clone(),
            old_rating,
            new_rating,
            expected_score: expected,
            n_wins,
            n_games,
        })
    }

    /// [`update_rating`](Self::update_rating) with handicap and gain factor
    /// taken from `config`, which must pass [`ExtendedEloConfig::validate`]
    pub fn update_with_config(
        &mut self,
        other: &RatedEntity,
        n_wins: f64,
        n_games: f64,
        config: &ExtendedEloConfig,
    ) -> Result<RatingChange> {
        config.validate()?;
        self.update_rating(other, n_wins, n_games, config.handicap, config.k_factor())
    }

    /// Update from a win/draw/loss tally against `other`
    pub fn record_results(
        &mut self,
        other: &RatedEntity,
        tally: MatchTally,
        config: &ExtendedEloConfig,
    ) -> Result<RatingChange> {
        self.update_with_config(other, tally.score(), tally.games(), config)
    }

    /// Rating in the representation used by the skillratings crate
    pub fn as_elo_rating(&self) -> EloRating {
        EloRating {
            rating: self.rating,
        }
    }
}

impl From<&RatedEntity> for EloRating {
    fn from(entity: &RatedEntity) -> Self {
        entity.as_elo_rating()
    }
}

impl fmt::Display for RatedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn check_rating(name: &str, rating: f64) -> std::result::Result<(), EloError> {
    if rating.is_finite() {
        Ok(())
    } else {
        Err(EloError::InvalidRating {
            name: name.to_string(),
            value: rating,
        })
    }
}

fn validate_match_input(n_wins: f64, n_games: f64, handicap: f64, k_factor: f64) -> Result<()> {
    for (label, value) in [
        ("n_wins", n_wins),
        ("n_games", n_games),
        ("handicap", handicap),
        ("k_factor", k_factor),
    ] {
        if !value.is_finite() {
            return Err(EloError::InvalidMatchResult {
                reason: format!("{} must be finite, got {}", label, value),
            }
            .into());
        }
    }

    if n_games < 0.0 {
        return Err(EloError::InvalidMatchResult {
            reason: format!("n_games must be non-negative, got {}", n_games),
        }
        .into());
    }

    Ok(())
}
