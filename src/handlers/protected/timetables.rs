use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use crate::api::TimetablesJson;
use crate::app::AppState;
use crate::domain::Token;
use crate::middleware::{ApiResponse, ApiResult};

/// PUT /api/timetables - Replace the caller's whole week
pub async fn put(
    State(state): State<AppState>,
    Extension(token): Extension<Token>,
    body: Result<Json<TimetablesJson>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = body?;
    let week = body.into_timetables()?;

    state.timetables.add(&token, week).await?;
    Ok(ApiResponse::no_content())
}

/// GET /api/timetables - Fetch the caller's week (404 until one is stored)
pub async fn get(State(state): State<AppState>, Extension(token): Extension<Token>) -> ApiResult<TimetablesJson> {
    let week = state.timetables.get(&token).await?;
    Ok(ApiResponse::success(TimetablesJson::from(&week)))
}
