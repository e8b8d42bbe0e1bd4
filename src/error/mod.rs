//! Error types for the caption engine

use thiserror::Error;

/// Result type alias for caption engine operations
pub type Result<T> = std::result::Result<T, CaptionError>;

/// Main error type for the caption engine
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CaptionError {
    /// True for caller mistakes, false for engine or environment failures
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CaptionError::InvalidArgument(_))
    }
}

/// Request validation failures, surfaced as `CaptionError::InvalidArgument`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("destination must not be empty")]
    EmptyDestination,

    #[error("variants must be at least 1, got {0}")]
    InvalidVariantCount(i64),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unrecognized {field} '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("{field} too long: {length} characters (max: {max})")]
    FieldTooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error("seed must be an integer, got {0}")]
    InvalidSeed(String),

    #[error("cannot pick from an empty sequence")]
    EmptySequence,
}

impl From<config::ConfigError> for CaptionError {
    fn from(err: config::ConfigError) -> Self {
        CaptionError::Config(err.to_string())
    }
}
