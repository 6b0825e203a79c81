// api/mod.rs - Wire representations and boundary validation
//
// Request bodies are bound into these DTOs, validated (lengths, required
// fields, id ranges) and only then converted into domain values.

pub mod task;
pub mod timetable;

use std::collections::HashMap;

use crate::error::{ApiError, INVALID_JSON_FORMAT};

pub use task::{TaskJson, TasksJson};
pub use timetable::{ClassJson, DayJson, TimetablesJson, WeekJson};

/// Collected per-field validation failures, keyed by dotted field path.
#[derive(Debug, Default)]
pub struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Add an error when `value` has more than `max` characters.
    pub fn check_max_chars(&mut self, field: impl Into<String>, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("must be at most {} characters", max));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_error(self) -> ApiError {
        ApiError::validation_error(INVALID_JSON_FORMAT, Some(self.0))
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.check_max_chars("title", &"あ".repeat(85), 85);
        assert!(errors.is_empty());

        errors.check_max_chars("title", &"a".repeat(86), 85);
        assert!(!errors.is_empty());
        assert!(errors.into_result().is_err());
    }
}
