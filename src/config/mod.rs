//! Configuration management for the rating crate
//!
//! This module handles configuration loading from environment variables and
//! embedded TOML text, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, LoggingSettings};
pub use rating::RatingConfig;
