//! Process-wide logging setup
//!
//! Rated entities emit `tracing` events tagged with an `entity` field; this
//! module installs the subscriber that formats them. Call [`init_logging`]
//! once at startup.

use crate::config::LoggingSettings;
use crate::error::{EloError, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter, letting `RUST_LOG` override the configured level
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize structured logging with the configured level
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&settings.level))
        .with_target(settings.with_target)
        .with_line_number(settings.with_line_number)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| EloError::LoggingError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            ..LoggingSettings::default()
        };

        // Only this test installs a global subscriber in the unit-test binary
        assert!(init_logging(&settings).is_ok());

        let err = init_logging(&settings).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EloError>(),
            Some(EloError::LoggingError { .. })
        ));
    }
}
