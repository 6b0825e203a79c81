// usecase/task.rs - Per-user task list operations

use std::sync::Arc;

use crate::domain::{Task, TaskId, TaskRepository, Token};
use super::credential::AuthService;
use super::error::UsecaseError;

#[derive(Clone)]
pub struct TaskUsecase {
    auth: AuthService,
    tasks: Arc<dyn TaskRepository>,
}

impl TaskUsecase {
    pub fn new(auth: AuthService, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { auth, tasks }
    }

    /// Store a new task for the token's owner. Not idempotent.
    pub async fn add(&self, token: &Token, task: Task) -> Result<TaskId, UsecaseError> {
        let user = self.auth.authorize(token).await?;
        let id = self.tasks.create(&user, &task).await?;
        tracing::debug!("Created task {} for user '{}'", id, user);
        Ok(id)
    }

    /// Delete one of the caller's own tasks.
    ///
    /// Membership is checked against the caller's task list before the store
    /// is asked to delete, so an id belonging to someone else is `InvalidId`.
    pub async fn delete(&self, token: &Token, id: i64) -> Result<(), UsecaseError> {
        self.auth.authenticate(token).await?;

        if id == 0 {
            return Err(UsecaseError::IdIsNotZero);
        }
        if id < 0 {
            return Err(UsecaseError::InvalidId);
        }

        let user = self.auth.whose(token).await?;
        let owned = self.tasks.get_all(&user).await?;
        if !owned.iter().any(|task| task.raw_id() == id) {
            tracing::warn!("User '{}' tried to delete task {} they do not own", user, id);
            return Err(UsecaseError::InvalidId);
        }

        self.tasks.remove(&user, id).await?;
        tracing::debug!("Deleted task {} for user '{}'", id, user);
        Ok(())
    }

    pub async fn delete_all(&self, token: &Token) -> Result<(), UsecaseError> {
        let user = self.auth.authorize(token).await?;
        self.tasks.remove_all(&user).await?;
        tracing::debug!("Deleted all tasks for user '{}'", user);
        Ok(())
    }

    pub async fn get_all(&self, token: &Token) -> Result<Vec<Task>, UsecaseError> {
        let user = self.auth.authorize(token).await?;
        Ok(self.tasks.get_all(&user).await?)
    }
}
