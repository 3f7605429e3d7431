use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    Description,
    PlayerName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field:?} must be at least {min} characters")]
    TooShort { field: ValidationField, min: usize },
    #[error("{field:?} must be at most {max} characters")]
    TooLong { field: ValidationField, max: usize },
}

impl From<ValidationError> for ErrorResponse {
    fn from(value: ValidationError) -> Self {
        Self::new(value.to_string())
    }
}
