// src/domain/errors.rs
use crate::domain::time::TimestampParseError;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<TimestampParseError> for DomainError {
    fn from(err: TimestampParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
