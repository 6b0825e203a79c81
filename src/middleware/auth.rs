use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::domain::Token;
use crate::error::ApiError;
use crate::usecase::UsecaseError;

/// Session token middleware: lifts the configured header into a request extension.
///
/// Only presence is checked here. Whether the token belongs to anyone is the
/// usecase's job, so a well-formed but unknown token still reaches the handler
/// and fails there with the same 401.
pub async fn session_token_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_headers(&headers, &state.token_header).map_err(|reason| {
        tracing::warn!("Rejected request to {}: {}", request.uri().path(), reason);
        ApiError::unauthorized(UsecaseError::InvalidToken.to_string())
    })?;

    request.extensions_mut().insert(token);
    Ok(next.run(request).await)
}

/// Extract the session token from the named header
fn extract_token_from_headers(headers: &HeaderMap, header: &str) -> Result<Token, &'static str> {
    let value = headers.get(header).ok_or("missing token header")?;

    let value = value.to_str().map_err(|_| "token header is not visible ASCII")?;

    let value = value.trim();
    if value.is_empty() {
        return Err("empty token header");
    }
    Ok(Token::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_configured_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-session", HeaderValue::from_static(" abc "));
        let token = extract_token_from_headers(&headers, "X-Session").unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn missing_or_blank_header_is_rejected() {
        let mut headers = HeaderMap::new();
        assert!(extract_token_from_headers(&headers, "Token").is_err());
        headers.insert("token", HeaderValue::from_static("   "));
        assert!(extract_token_from_headers(&headers, "Token").is_err());
    }
}
