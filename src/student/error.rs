//! Error types for student store operations.

use std::error::Error;
use std::fmt;

use crate::model::ModelError;

/// Error type for student store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// No record has this id.
    NotFound(String),
    /// A required field is missing or malformed.
    Validation(String),
    /// Store or connection failure unrelated to the input.
    Unexpected(String),
}

impl fmt::Display for StudentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentError::NotFound(_) => write!(f, "Student not found"),
            StudentError::Validation(msg) => write!(f, "{}", msg),
            StudentError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for StudentError {}

impl From<ModelError> for StudentError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotFound { id, .. } => StudentError::NotFound(id),
            other => StudentError::Unexpected(other.to_string()),
        }
    }
}

impl StudentError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StudentError::NotFound(_) => 404,
            StudentError::Validation(_) => 400,
            StudentError::Unexpected(_) => 500,
        }
    }
}
