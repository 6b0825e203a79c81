// handlers/protected/mod.rs - Session-token handlers (/api/*)
//
// Every route here sits behind session_token_middleware, which inserts the
// caller's Token into the request extensions. Handlers hand that token to the
// usecases, which resolve it to a username.
pub mod session;
pub mod task;
pub mod timetables;

pub use session::logout as session_logout;
pub use task::{create as task_create, delete as task_delete, delete_all as tasks_delete, list as tasks_list};
pub use timetables::{get as timetables_get, put as timetables_put};
