//! Error types for sqlfill

use crate::arity::Arity;
use crate::kind::StatementKind;
use thiserror::Error;

/// Result type alias for sqlfill operations
pub type FillResult<T> = Result<T, FillError>;

/// Error types for statement rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// Argument count outside the kind's declared range
    #[error("{kind} expects {expected} arguments, got {got}")]
    Arity {
        kind: StatementKind,
        expected: Arity,
        got: usize,
    },

    /// Statement kind name that does not match any template
    #[error("Unknown statement kind: {0}")]
    UnknownKind(String),

    /// Invalid data source configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl FillError {
    /// Create an arity violation error
    pub fn arity(kind: StatementKind, expected: Arity, got: usize) -> Self {
        Self::Arity {
            kind,
            expected,
            got,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an arity violation
    pub fn is_arity_violation(&self) -> bool {
        matches!(self, Self::Arity { .. })
    }

    /// Check if this is an unknown kind error
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Self::UnknownKind(_))
    }
}
