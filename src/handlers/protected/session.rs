use axum::{extract::State, Extension};

use crate::app::AppState;
use crate::domain::Token;
use crate::middleware::{ApiResponse, ApiResult};

/// DELETE /api/session - Drop every session of the token's owner
pub async fn logout(State(state): State<AppState>, Extension(token): Extension<Token>) -> ApiResult<()> {
    state.auth.logout(&token).await?;
    Ok(ApiResponse::no_content())
}
