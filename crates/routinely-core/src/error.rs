//! Core error types for routinely-core.
//!
//! Only routine creation and emotion connections can be rejected by user
//! input; run transitions and log appends are total and never produce
//! errors. Configuration loading is the only I/O boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for routinely-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be resolved
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Validation errors.
///
/// The `Display` text is shown to the user verbatim next to the form that
/// produced it, so messages are phrased as instructions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Routine name missing or whitespace only
    #[error("Please enter a routine name")]
    EmptyName,

    /// A task row was left blank (1-based position)
    #[error("Please fill in every task (task {position} is empty)")]
    EmptyTaskText { position: usize },

    /// Routine has no tasks at all
    #[error("A routine needs at least one task")]
    NoTasks,

    /// Duration did not parse to a positive whole number of minutes
    #[error("Please enter a valid duration in minutes (got '{input}')")]
    InvalidDuration { input: String },

    /// Catalog already holds a routine with this id
    #[error("A routine with id '{0}' already exists")]
    DuplicateId(String),

    /// Connection entries must carry notes
    #[error("Please describe the interaction before saving")]
    EmptyNotes,

    /// Emotion name outside the known set
    #[error("Unknown emotion '{0}'")]
    UnknownEmotion(String),

    /// Sentiment name outside positive/neutral/negative
    #[error("Unknown sentiment '{0}' (expected positive, neutral or negative)")]
    UnknownSentiment(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Please enter a routine name");
        assert_eq!(
            ValidationError::EmptyTaskText { position: 2 }.to_string(),
            "Please fill in every task (task 2 is empty)"
        );
        assert_eq!(
            ValidationError::InvalidDuration { input: "abc".into() }.to_string(),
            "Please enter a valid duration in minutes (got 'abc')"
        );
    }

    #[test]
    fn validation_converts_into_core_error() {
        let err: CoreError = ValidationError::NoTasks.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::NoTasks)));
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
