// api/task.rs - Task JSON bodies: {"id": "-1", "date": "2024-01-01", "title": "..."}

use serde::{Deserialize, Serialize};

use crate::domain::task::{MAX_TITLE_CHARS, UNASSIGNED_ID};
use crate::domain::{Task, TaskError};
use crate::error::ApiError;
use super::FieldErrors;

/// One task on the wire. The id travels as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskJson {
    pub id: String,
    pub date: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksJson {
    pub tasks: Vec<TaskJson>,
}

/// Parse a wire id: an integer that is `-1` or positive.
pub fn parse_id(raw: &str) -> Result<i64, &'static str> {
    let id: i64 = raw.trim().parse().map_err(|_| "must be numeric")?;
    if id == 0 {
        return Err("must not be zero");
    }
    if id < UNASSIGNED_ID {
        return Err("must be -1 or a positive integer");
    }
    Ok(id)
}

impl TaskJson {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();

        if self.id.trim().is_empty() {
            errors.add("id", "is required");
        } else if let Err(msg) = parse_id(&self.id) {
            errors.add("id", msg);
        }

        if self.date.trim().is_empty() {
            errors.add("date", "is required");
        }

        if self.title.is_empty() {
            errors.add("title", "is required");
        } else {
            errors.check_max_chars("title", &self.title, MAX_TITLE_CHARS);
        }

        errors.into_result()
    }

    /// Validate and convert into a domain task.
    pub fn into_task(self) -> Result<Task, ApiError> {
        self.validate()?;
        let id = parse_id(&self.id).map_err(ApiError::bad_request)?;

        Task::new(id, &self.date, self.title).map_err(|e| {
            let mut errors = FieldErrors::new();
            match e {
                TaskError::InvalidDate(_) => errors.add("date", "must be a date formatted YYYY-MM-DD"),
                TaskError::IdIsZero | TaskError::InvalidId(_) => errors.add("id", e.to_string()),
            }
            errors.into_error()
        })
    }
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        Self {
            id: task.raw_id().to_string(),
            date: task.text_date(),
            title: task.title().to_string(),
        }
    }
}

impl From<&[Task]> for TasksJson {
    fn from(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.iter().map(TaskJson::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str, date: &str, title: &str) -> TaskJson {
        TaskJson {
            id: id.to_string(),
            date: date.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn parse_id_accepts_sentinel_and_positive() {
        assert_eq!(parse_id("-1"), Ok(-1));
        assert_eq!(parse_id("17"), Ok(17));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-2").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn new_task_body_converts() {
        let task = body("-1", "2024-01-01", "buy milk").into_task().unwrap();
        assert_eq!(task.id(), None);
        assert_eq!(task.title(), "buy milk");
    }

    #[test]
    fn rejects_missing_and_oversized_fields() {
        assert!(body("", "2024-01-01", "x").into_task().is_err());
        assert!(body("-1", "", "x").into_task().is_err());
        assert!(body("-1", "2024-01-01", "").into_task().is_err());
        assert!(body("-1", "2024-01-01", &"t".repeat(86)).into_task().is_err());
        assert!(body("-1", "2024-01-01", &"t".repeat(85)).into_task().is_ok());
        assert!(body("0", "2024-01-01", "x").into_task().is_err());
    }

    #[test]
    fn bad_date_is_a_validation_error() {
        let err = body("-1", "tomorrow", "x").into_task().unwrap_err();
        match err {
            ApiError::ValidationError { field_errors: Some(fields), .. } => {
                assert!(fields.contains_key("date"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn stored_tasks_render_as_strings() {
        let task = Task::new(5, "2024-12-24", "wrap gifts").unwrap();
        let json = TasksJson::from(std::slice::from_ref(&task));
        assert_eq!(json.tasks, vec![body("5", "2024-12-24", "wrap gifts")]);
    }
}
