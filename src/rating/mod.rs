//! Elo rating model
//!
//! This module provides the rated entity, the logistic win-probability and
//! rating-update arithmetic, and a calculator for configured updates.

pub mod calculator;
pub mod entity;

// Re-export commonly used types
pub use calculator::{
    rating_delta, win_probability, EloCalculator, ExtendedEloConfig, DEFAULT_K_FACTOR,
    DEFAULT_RATING, ELO_SCALE,
};
pub use entity::RatedEntity;
