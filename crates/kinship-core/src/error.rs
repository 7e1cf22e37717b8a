//! Error types for Kinship Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Kinship's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Kinship error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Cycle detected through: {0}")]
    Cycle(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Family not found: {0}")]
    FamilyNotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Input too short or malformed to extract a field, or a cyclic family graph
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedLine { .. } | Self::Cycle(_))
    }

    /// A query followed an id that is not in the registry
    pub fn is_unknown_reference(&self) -> bool {
        matches!(self, Self::PersonNotFound(_) | Self::FamilyNotFound(_))
    }
}
