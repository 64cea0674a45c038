//! Core error types for yearsketch-core.
//!
//! Invalid or incomplete input is rejected at the affordance level and
//! reported through [`SessionError`]; collaborator failures (export,
//! analytics) are swallowed by their callers and never reach the user.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for yearsketch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session flow errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Export-related errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised by the question flow and derivation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A choice id that is not part of the question's option table
    #[error("Invalid choice '{choice}' for question {question}")]
    InvalidChoice { question: String, choice: String },

    /// Free-text input was empty or whitespace-only
    #[error("Empty input for '{field}'")]
    EmptyInput { field: &'static str },

    /// An answer was recorded for a question other than the current stage
    #[error("Answer for {got} recorded while on stage {expected}")]
    WrongStage { expected: String, got: String },

    /// A two-step flow was finished before its first step
    #[error("Step '{step}' requires an earlier step to complete first")]
    StepOutOfOrder { step: &'static str },

    /// An activity was tapped twice
    #[error("Activity '{0}' has already been used")]
    ActivityUsed(String),

    /// An activity id not present in the catalog
    #[error("Unknown activity '{0}'")]
    UnknownActivity(String),

    /// The battery question needs more taps before it can complete
    #[error("Need at least {need} activities, got {have}")]
    NotEnoughActivities { have: usize, need: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Export/clipboard errors. Always caught by the export chain.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The target cannot be used in this environment
    #[error("Export target '{0}' is unavailable")]
    Unavailable(String),

    /// The target accepted the request but the write failed
    #[error("Export target '{target}' failed: {message}")]
    WriteFailed { target: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
