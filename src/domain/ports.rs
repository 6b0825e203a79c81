// domain/ports.rs - Repository contracts the usecases depend on
//
// Each store is a narrow async trait so usecases can run against Postgres or
// the in-memory adapters without knowing which. Implementations must make
// every call atomic from the caller's point of view.

use async_trait::async_trait;
use thiserror::Error;

use super::task::{Task, TaskId};
use super::timetable::Timetables;
use super::user::{Credential, Token, Username, UsernameError};

/// Errors surfaced by persistence adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("stored username is invalid: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("stored record is corrupt: {0}")]
    Corrupt(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage(message.into())
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        RepositoryError::Corrupt(message.into())
    }
}

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Insert one session record.
    async fn append(&self, credential: &Credential) -> Result<(), RepositoryError>;

    /// Delete every session belonging to `username`. No-op when there are none.
    async fn remove(&self, username: &Username) -> Result<(), RepositoryError>;

    async fn exists(&self, token: &Token) -> Result<bool, RepositoryError>;

    async fn get_by_token(&self, token: &Token) -> Result<Option<Credential>, RepositoryError>;

    async fn get_by_username(&self, username: &Username) -> Result<Option<Credential>, RepositoryError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task; the store assigns its identity.
    async fn create(&self, username: &Username, task: &Task) -> Result<TaskId, RepositoryError>;

    /// Every task owned by `username`, ascending by id.
    async fn get_all(&self, username: &Username) -> Result<Vec<Task>, RepositoryError>;

    /// Delete task `id` if `username` owns it. Fails with `InvalidInput` when `id < 1`.
    async fn remove(&self, username: &Username, id: i64) -> Result<(), RepositoryError>;

    async fn remove_all(&self, username: &Username) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait TimetablesRepository: Send + Sync {
    /// Create or wholesale replace the user's timetables.
    async fn add(&self, username: &Username, timetables: &Timetables) -> Result<(), RepositoryError>;

    async fn get(&self, username: &Username) -> Result<Option<Timetables>, RepositoryError>;
}
