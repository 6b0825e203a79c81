pub mod credential;
pub mod manager;
pub mod memory;
pub mod task;
pub mod timetables;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{AppConfig, StorageBackend};
use crate::domain::{CredentialRepository, RepositoryError, TaskRepository, TimetablesRepository};

pub use credential::PgCredentialRepository;
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::{MemoryCredentialRepository, MemoryTaskRepository, MemoryTimetablesRepository};
pub use task::PgTaskRepository;
pub use timetables::PgTimetablesRepository;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        // Keep driver details in the logs; callers only see a storage failure.
        tracing::error!("SQLx error: {}", err);
        RepositoryError::storage(err.to_string())
    }
}

/// The three stores the usecases run against, plus the pool when Postgres backs them.
#[derive(Clone)]
pub struct Repositories {
    pub credentials: Arc<dyn CredentialRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub timetables: Arc<dyn TimetablesRepository>,
    pool: Option<PgPool>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            credentials: Arc::new(PgCredentialRepository::new(pool.clone())),
            tasks: Arc::new(PgTaskRepository::new(pool.clone())),
            timetables: Arc::new(PgTimetablesRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            credentials: Arc::new(MemoryCredentialRepository::new()),
            tasks: Arc::new(MemoryTaskRepository::new()),
            timetables: Arc::new(MemoryTimetablesRepository::new()),
            pool: None,
        }
    }

    /// Build the configured backend. Postgres pools are migrated before use.
    pub async fn open(config: &AppConfig) -> Result<Self, DatabaseError> {
        match config.storage.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let pool = DatabaseManager::connect(&config.database).await?;
                DatabaseManager::migrate(&pool).await?;
                Ok(Self::postgres(pool))
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        match &self.pool {
            Some(pool) => DatabaseManager::health_check(pool).await,
            None => Ok(()),
        }
    }

    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            tracing::info!("Closed database pool");
        }
    }
}
