//! Error types for the rating crate
//!
//! Typed failures are raised as [`EloError`] and carried through the crate as
//! `anyhow::Error`, so callers can downcast when they need the variant.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Invalid rating for {name}: {value}")]
    InvalidRating { name: String, value: f64 },

    #[error("Invalid match result: {reason}")]
    InvalidMatchResult { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Logging initialization failed: {message}")]
    LoggingError { message: String },
}
