// database/task.rs - Postgres task store

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::domain::{RepositoryError, Task, TaskId, TaskRepository, Username};

#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    date: NaiveDate,
    title: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = RepositoryError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let id = TaskId::new(row.id)
            .map_err(|e| RepositoryError::corrupt(format!("task row {}: {}", row.id, e)))?;
        Ok(Task::stored(id, row.date, row.title))
    }
}

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, username: &Username, task: &Task) -> Result<TaskId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tasks (username, date, title) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(username.as_str())
        .bind(task.date())
        .bind(task.title())
        .fetch_one(&self.pool)
        .await?;

        TaskId::new(id).map_err(|e| RepositoryError::corrupt(e.to_string()))
    }

    async fn get_all(&self, username: &Username) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, date, title FROM tasks WHERE username = $1 ORDER BY id",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn remove(&self, username: &Username, id: i64) -> Result<(), RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::InvalidInput(format!("invalid id {}", id)));
        }

        sqlx::query("DELETE FROM tasks WHERE id = $1 AND username = $2")
            .bind(id)
            .bind(username.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_all(&self, username: &Username) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM tasks WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> TaskRow {
        TaskRow {
            id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            title: "buy milk".to_string(),
        }
    }

    #[test]
    fn valid_row_converts() {
        let task = Task::try_from(row(7)).unwrap();
        assert_eq!(task.raw_id(), 7);
        assert_eq!(task.text_date(), "2024-01-01");
        assert_eq!(task.title(), "buy milk");
    }

    #[test]
    fn non_positive_id_row_is_corrupt() {
        for id in [0, -1, -42] {
            let err = Task::try_from(row(id)).unwrap_err();
            assert!(matches!(err, RepositoryError::Corrupt(_)), "id {}", id);
        }
    }
}
