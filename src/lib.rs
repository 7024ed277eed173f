//! Elo Rating - skill ratings for named competitors
//!
//! This crate provides a rated entity with the classical logistic Elo
//! win-probability model and in-place rating updates from batches of
//! pairwise results, together with configuration and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloCalculator, ExtendedEloConfig, RatedEntity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
