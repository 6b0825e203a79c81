use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::{str::FromStr, time::Duration};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Table definitions, applied idempotently at startup or via `planner migrate`.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS credentials (
        username TEXT NOT NULL,
        token    TEXT NOT NULL,
        PRIMARY KEY (username, token)
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS credentials_token_idx ON credentials (token)",
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id       BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL,
        date     DATE NOT NULL,
        title    TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS tasks_username_idx ON tasks (username)",
    r#"
    CREATE TABLE IF NOT EXISTS timetables (
        username TEXT PRIMARY KEY,
        body     JSONB NOT NULL
    )
    "#,
];

/// Connection pool construction and schema bootstrap
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool against DATABASE_URL using the configured limits
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = Self::database_url()?;

        let mut options = PgConnectOptions::from_str(&url)?;
        if !config.enable_query_logging {
            options = options.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_with(options)
            .await?;

        info!("Created database pool (max {} connections)", config.max_connections);
        Ok(pool)
    }

    fn database_url() -> Result<String, DatabaseError> {
        std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }
        info!("Database schema is up to date");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_every_store() {
        for table in ["credentials", "tasks", "timetables"] {
            let needle = format!("CREATE TABLE IF NOT EXISTS {}", table);
            assert!(SCHEMA.iter().any(|s| s.contains(&needle)), "missing {}", table);
        }
    }

    #[test]
    fn every_statement_is_idempotent() {
        assert!(SCHEMA.iter().all(|s| s.contains("IF NOT EXISTS")));
    }
}
