// src/application/error.rs
use crate::domain::{errors::DomainError, time::TimestampParseError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Whether the caller sent something unusable (as opposed to a server fault).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(err) => !matches!(err, DomainError::Persistence(_)),
        }
    }
}

impl From<TimestampParseError> for ApplicationError {
    fn from(err: TimestampParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
