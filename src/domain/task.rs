// domain/task.rs - Dated, titled tasks owned by a single user

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Textual layout used for task dates on the wire and in logs.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Wire value for a task that has not been given an identity by the store yet.
pub const UNASSIGNED_ID: i64 = -1;

/// Title length limit in characters, checked at the HTTP boundary.
pub const MAX_TITLE_CHARS: usize = 85;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task id must not be zero")]
    IdIsZero,

    #[error("invalid task id: {0}")]
    InvalidId(i64),

    #[error("invalid task date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Store-assigned task identity. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(id: i64) -> Result<Self, TaskError> {
        match id {
            0 => Err(TaskError::IdIsZero),
            id if id < 0 => Err(TaskError::InvalidId(id)),
            id => Ok(Self(id)),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for TaskId {
    type Error = TaskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for i64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    date: NaiveDate,
    title: String,
}

impl Task {
    /// Build a task from boundary values. `-1` means "not persisted yet";
    /// zero and other negatives are rejected.
    pub fn new(id: i64, date: &str, title: impl Into<String>) -> Result<Self, TaskError> {
        let id = if id == UNASSIGNED_ID {
            None
        } else {
            Some(TaskId::new(id)?)
        };
        let date = NaiveDate::parse_from_str(date, DATE_LAYOUT)
            .map_err(|_| TaskError::InvalidDate(date.to_string()))?;

        Ok(Self {
            id,
            date,
            title: title.into(),
        })
    }

    /// Task as read back from a store, identity already assigned.
    pub fn stored(id: TaskId, date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            date,
            title: title.into(),
        }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Numeric id as exposed on the wire, `-1` when unassigned.
    pub fn raw_id(&self) -> i64 {
        self.id.map(TaskId::get).unwrap_or(UNASSIGNED_ID)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text_date(&self) -> String {
        self.date.format(DATE_LAYOUT).to_string()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_sentinel_maps_to_none() {
        let task = Task::new(-1, "2024-01-01", "buy milk").unwrap();
        assert_eq!(task.id(), None);
        assert_eq!(task.raw_id(), UNASSIGNED_ID);
        assert_eq!(task.text_date(), "2024-01-01");
        assert_eq!(task.title(), "buy milk");
    }

    #[test]
    fn zero_id_is_rejected_distinctly() {
        assert_eq!(Task::new(0, "2024-01-01", "x"), Err(TaskError::IdIsZero));
        assert_eq!(Task::new(-2, "2024-01-01", "x"), Err(TaskError::InvalidId(-2)));
    }

    #[test]
    fn positive_id_is_kept() {
        let task = Task::new(42, "2024-02-29", "leap").unwrap();
        assert_eq!(task.id().map(TaskId::get), Some(42));
    }

    #[test]
    fn malformed_dates_fail() {
        for bad in ["", "2024-13-01", "01/02/2024", "2023-02-29"] {
            assert!(matches!(Task::new(-1, bad, "x"), Err(TaskError::InvalidDate(_))), "{bad}");
        }
    }

    #[test]
    fn task_id_serde_rejects_non_positive() {
        assert!(serde_json::from_str::<TaskId>("0").is_err());
        assert!(serde_json::from_str::<TaskId>("-5").is_err());
        assert_eq!(serde_json::from_str::<TaskId>("7").unwrap().get(), 7);
    }
}
