//! Error types for configuration loading.
//!
//! The simulation itself never fails; only building a [`GameConfig`](crate::GameConfig)
//! from external input can.

use thiserror::Error;

/// Errors that can occur while loading or validating a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for a config
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid-field error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } => Some(*field),
            Self::Parse(_) => None,
        }
    }
}
