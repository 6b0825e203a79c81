// app.rs - Router construction and shared handler state

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::Repositories;
use crate::handlers::{protected, public};
use crate::middleware::session_token_middleware;
use crate::usecase::{AuthService, TaskUsecase, TimetablesUsecase};

/// Everything a handler can reach. Cheap to clone; all stores sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub tasks: TaskUsecase,
    pub timetables: TimetablesUsecase,
    pub repositories: Repositories,
    /// Header the session token is read from
    pub token_header: String,
}

impl AppState {
    pub fn new(repositories: Repositories, config: &AppConfig) -> Self {
        let auth = AuthService::new(repositories.credentials.clone());
        Self {
            tasks: TaskUsecase::new(auth.clone(), repositories.tasks.clone()),
            timetables: TimetablesUsecase::new(auth.clone(), repositories.timetables.clone()),
            auth,
            repositories,
            token_header: config.api.token_header.clone(),
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Session token required
        .merge(api_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/tasks",
            get(protected::tasks_list)
                .post(protected::task_create)
                .delete(protected::tasks_delete),
        )
        .route("/api/tasks/:id", delete(protected::task_delete))
        .route(
            "/api/timetables",
            get(protected::timetables_get).put(protected::timetables_put),
        )
        .route("/api/session", delete(protected::session_logout))
        .route_layer(from_fn_with_state(state, session_token_middleware))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let mut headers = vec![axum::http::header::CONTENT_TYPE];
    match HeaderName::try_from(config.api.token_header.as_str()) {
        Ok(name) => headers.push(name),
        Err(_) => tracing::warn!("Token header '{}' is not a valid header name", config.api.token_header),
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(headers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_can_be_disabled() {
        let mut config = AppConfig::default();
        config.security.enable_cors = false;
        assert!(cors_layer(&config).is_none());

        config.security.enable_cors = true;
        config.security.cors_origins = vec!["not a header\u{7f}".to_string(), "https://ok.test".to_string()];
        assert!(cors_layer(&config).is_some());
    }
}
