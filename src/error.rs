// src/error.rs
//! Application error types with structured error handling.
//!
//! Construction-time problems with content are [`ValidationError`]s and
//! live in `types`. Everything that can go wrong around the content
//! (loading fixtures, looking up articles, reading configuration) is an
//! [`AppError`].

use crate::types::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed fixture {source_name}: {message}")]
    MalformedFixture {
        source_name: String,
        message: String,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Whether the error only means the requested article does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_))
    }

    /// Process exit status for the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ArticleNotFound(_) => 2,
            Self::Validation(_) | Self::MalformedFixture { .. } | Self::JsonParseError { .. } => 3,
            Self::MissingConfiguration(_) => 4,
            Self::Io(_) | Self::InternalError { .. } => 1,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = AppError::ArticleNotFound("nonexistent".into());
        assert!(err.is_not_found());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Article not found: nonexistent");
    }

    #[test]
    fn test_validation_errors_convert() {
        let err: AppError = ValidationError::EmptyField("title").into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Empty required field: title");
    }
}
