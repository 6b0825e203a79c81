// usecase/credential.rs - Token to identity resolution, the single gate in front of every resource

use std::sync::Arc;

use crate::domain::{Credential, CredentialRepository, RepositoryError, Token, Username};
use super::error::UsecaseError;

#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialRepository>,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialRepository>) -> Self {
        Self { credentials }
    }

    /// Whether any session carries this token. Absence is `Ok(false)`, not an error.
    pub async fn has_credential(&self, token: &Token) -> Result<bool, UsecaseError> {
        Ok(self.credentials.exists(token).await?)
    }

    /// Owner of the token. A missing record or a corrupt stored username both
    /// resolve to `InvalidToken`.
    pub async fn whose(&self, token: &Token) -> Result<Username, UsecaseError> {
        match self.credentials.get_by_token(token).await {
            Ok(Some(credential)) => Ok(credential.into_username()),
            Ok(None) => Err(UsecaseError::InvalidToken),
            Err(RepositoryError::InvalidUsername(e)) => {
                tracing::warn!("Credential record with malformed username: {}", e);
                Err(UsecaseError::InvalidToken)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fail-closed existence check. Callers resolve the identity afterwards.
    pub async fn authenticate(&self, token: &Token) -> Result<(), UsecaseError> {
        if self.has_credential(token).await? {
            Ok(())
        } else {
            tracing::warn!("Rejected request with unknown session token");
            Err(UsecaseError::InvalidToken)
        }
    }

    /// `authenticate` followed by `whose`.
    pub async fn authorize(&self, token: &Token) -> Result<Username, UsecaseError> {
        self.authenticate(token).await?;
        self.whose(token).await
    }

    /// Record a freshly issued session for `username`.
    pub async fn grant(&self, username: Username, token: Token) -> Result<Credential, UsecaseError> {
        let credential = Credential::new(username, token);
        self.credentials.append(&credential).await?;
        tracing::info!("Granted session for user '{}'", credential.username());
        Ok(credential)
    }

    /// Log the token's owner out of every session, not just this one.
    pub async fn logout(&self, token: &Token) -> Result<Username, UsecaseError> {
        let username = self.authorize(token).await?;
        self.credentials.remove(&username).await?;
        tracing::info!("Removed all sessions for user '{}'", username);
        Ok(username)
    }

    /// Revoke every session of a user by name (operator path, no token needed).
    pub async fn revoke(&self, username: &Username) -> Result<(), UsecaseError> {
        self.credentials.remove(username).await?;
        tracing::info!("Revoked all sessions for user '{}'", username);
        Ok(())
    }

    /// Any live session for the user.
    pub async fn session_of(&self, username: &Username) -> Result<Option<Credential>, UsecaseError> {
        match self.credentials.get_by_username(username).await {
            Ok(found) => Ok(found),
            Err(RepositoryError::InvalidUsername(e)) => Err(UsecaseError::InvalidUsername(e)),
            Err(e) => Err(e.into()),
        }
    }
}
