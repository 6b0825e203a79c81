use thiserror::Error;

use crate::domain::{RepositoryError, UsernameError};

/// Error kinds returned by the usecase layer.
#[derive(Debug, Error)]
pub enum UsecaseError {
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid ID")]
    InvalidId,

    #[error("ID must not be zero")]
    IdIsNotZero,

    #[error("timetables not found")]
    TimetablesNotFound,

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
