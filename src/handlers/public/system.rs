use axum::{extract::State, response::IntoResponse};
use serde_json::json;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::ApiResponse;

/// GET / - Service descriptor
pub async fn root() -> impl IntoResponse {
    ApiResponse::success(json!({
        "name": "Planner API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Per-user task lists and weekly class timetables",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "tasks": "/api/tasks[/:id] (token)",
            "timetables": "/api/timetables (token)",
            "session": "/api/session (token)",
        }
    }))
}

/// GET /health - Storage health check
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.repositories.health_check().await {
        Ok(()) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "storage": "ok"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiError::service_unavailable("storage unavailable").into_response()
        }
    }
}
