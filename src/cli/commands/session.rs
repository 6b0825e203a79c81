use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::domain::{Token, Username};
use crate::usecase::AuthService;

#[derive(Subcommand)]
pub enum SessionCommands {
    #[command(about = "Issue a new session token for a user")]
    Grant {
        #[arg(help = "Username")]
        username: String,
    },

    #[command(about = "Remove every session token of a user")]
    Revoke {
        #[arg(help = "Username")]
        username: String,
    },

    #[command(about = "Show which user a session token belongs to")]
    Check {
        #[arg(help = "Session token")]
        token: String,
    },
}

pub async fn handle(cmd: SessionCommands, auth: &AuthService, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SessionCommands::Grant { username } => {
            let username = Username::new(username)?;
            let token = Token::new(uuid::Uuid::new_v4().to_string());
            let credential = auth.grant(username, token).await?;

            output_success(
                output_format,
                &format!("Granted session for '{}': {}", credential.username(), credential.token().as_str()),
                Some(json!({
                    "username": credential.username(),
                    "token": credential.token().as_str(),
                })),
            )
        }
        SessionCommands::Revoke { username } => {
            let username = Username::new(username)?;
            let had_session = auth.session_of(&username).await?.is_some();
            auth.revoke(&username).await?;

            let message = if had_session {
                format!("Revoked sessions for '{}'", username)
            } else {
                format!("'{}' had no sessions", username)
            };
            output_success(
                output_format,
                &message,
                Some(json!({ "username": username, "revoked": had_session })),
            )
        }
        SessionCommands::Check { token } => {
            let user = auth.authorize(&Token::new(token)).await?;
            output_success(
                output_format,
                &format!("Token belongs to '{}'", user),
                Some(json!({ "username": user })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::database::MemoryCredentialRepository;
    use crate::usecase::UsecaseError;

    fn auth() -> AuthService {
        AuthService::new(Arc::new(MemoryCredentialRepository::new()))
    }

    #[tokio::test]
    async fn grant_then_check_then_revoke() {
        let auth = auth();
        let alice = Username::new("alice").unwrap();

        handle(SessionCommands::Grant { username: "alice".into() }, &auth, OutputFormat::Json)
            .await
            .unwrap();
        let credential = auth.session_of(&alice).await.unwrap().unwrap();

        handle(
            SessionCommands::Check { token: credential.token().as_str().to_string() },
            &auth,
            OutputFormat::Text,
        )
        .await
        .unwrap();

        handle(SessionCommands::Revoke { username: "alice".into() }, &auth, OutputFormat::Text)
            .await
            .unwrap();
        assert!(auth.session_of(&alice).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn grant_rejects_empty_username() {
        let result = handle(SessionCommands::Grant { username: String::new() }, &auth(), OutputFormat::Text).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn check_unknown_token_fails() {
        let err = handle(SessionCommands::Check { token: "nope".into() }, &auth(), OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<UsecaseError>(), Some(UsecaseError::InvalidToken)));
    }
}
