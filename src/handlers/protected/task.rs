use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::api::{TaskJson, TasksJson};
use crate::app::AppState;
use crate::domain::Token;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct CreatedTask {
    pub id: String,
}

/// POST /api/tasks - Add a task to the caller's list
pub async fn create(
    State(state): State<AppState>,
    Extension(token): Extension<Token>,
    body: Result<Json<TaskJson>, JsonRejection>,
) -> ApiResult<CreatedTask> {
    let Json(body) = body?;
    let task = body.into_task()?;

    let id = state.tasks.add(&token, task).await?;
    Ok(ApiResponse::created(CreatedTask { id: id.to_string() }))
}

/// GET /api/tasks - List the caller's tasks
pub async fn list(State(state): State<AppState>, Extension(token): Extension<Token>) -> ApiResult<TasksJson> {
    let tasks = state.tasks.get_all(&token).await?;
    Ok(ApiResponse::success(TasksJson::from(tasks.as_slice())))
}

/// DELETE /api/tasks/:id - Delete one of the caller's tasks
///
/// Only "is it an integer" is decided here; zero, negative and foreign ids
/// are the usecase's call so that an unknown token still wins with 401.
pub async fn delete(
    State(state): State<AppState>,
    Extension(token): Extension<Token>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("invalid id"))?;

    state.tasks.delete(&token, id).await?;
    Ok(ApiResponse::no_content())
}

/// DELETE /api/tasks - Clear the caller's list
pub async fn delete_all(State(state): State<AppState>, Extension(token): Extension<Token>) -> ApiResult<()> {
    state.tasks.delete_all(&token).await?;
    Ok(ApiResponse::no_content())
}
