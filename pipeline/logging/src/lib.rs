#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for Axial.
//!
//! Libraries emit `tracing` events; the binary installs a stderr subscriber
//! once at startup with [`init`]. Console progress for a collection run is
//! ordinary stdout output and does not go through here.

use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The level string is not a valid filter directive.
    #[error("Invalid log level '{level}': {reason}")]
    InvalidLevel {
        /// The rejected directive
        level: String,
        /// Parser message
        reason: String,
    },
    /// A global subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Build the filter for `level`, letting `RUST_LOG` take precedence.
pub fn filter_for(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidLevel {
        level: level.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global stderr subscriber at `level`.
pub fn init(level: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

/// Emits a trace-level event tagged with a module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for() {
        std::env::remove_var("RUST_LOG");
        assert!(filter_for("info").is_ok());
        assert!(filter_for("axial_http=debug,warn").is_ok());

        match filter_for("axial=loud") {
            Err(LoggingError::InvalidLevel { level, .. }) => assert_eq!(level, "axial=loud"),
            other => panic!("expected InvalidLevel, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_trace_without_subscriber() {
        // No subscriber installed: must be a silent no-op
        trace("TEST", "nothing listens");
    }
}
