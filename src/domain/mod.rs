pub mod ports;
pub mod task;
pub mod timetable;
pub mod user;

pub use ports::{CredentialRepository, RepositoryError, TaskRepository, TimetablesRepository};
pub use task::{Task, TaskError, TaskId};
pub use timetable::{Class, Period, Timetable, Timetables, Weekday};
pub use user::{Credential, Token, Username, UsernameError};
