// usecase/mod.rs - Authorization-gated operations over the repository ports
//
// Every resource operation passes through AuthService first: an existence
// check on the token (fail-closed), then resolution of the owning username
// which scopes the store call.

pub mod credential;
pub mod error;
pub mod task;
pub mod timetables;

pub use credential::AuthService;
pub use error::UsecaseError;
pub use task::TaskUsecase;
pub use timetables::TimetablesUsecase;
