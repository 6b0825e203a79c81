pub mod auth;
pub mod response;

pub use auth::session_token_middleware;
pub use response::{ApiResponse, ApiResult};
