// database/credential.rs - Postgres session store

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::{Credential, CredentialRepository, RepositoryError, Token, Username};

#[derive(Debug, FromRow)]
struct CredentialRow {
    username: String,
    token: String,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = RepositoryError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(Credential::from_stored(row.username, row.token)?)
    }
}

pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn append(&self, credential: &Credential) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO credentials (username, token) VALUES ($1, $2)")
            .bind(credential.username().as_str())
            .bind(credential.token().as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, username: &Username) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM credentials WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, token: &Token) -> Result<bool, RepositoryError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM credentials WHERE token = $1)")
            .bind(token.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn get_by_token(&self, token: &Token) -> Result<Option<Credential>, RepositoryError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT username, token FROM credentials WHERE token = $1 LIMIT 1",
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Credential::try_from).transpose()
    }

    async fn get_by_username(&self, username: &Username) -> Result<Option<Credential>, RepositoryError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT username, token FROM credentials WHERE username = $1 LIMIT 1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Credential::try_from).transpose()
    }
}
