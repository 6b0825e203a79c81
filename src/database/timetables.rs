// database/timetables.rs - Postgres timetables store, one JSONB document per user

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};

use crate::domain::{RepositoryError, Timetables, TimetablesRepository, Username};

pub struct PgTimetablesRepository {
    pool: PgPool,
}

impl PgTimetablesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimetablesRepository for PgTimetablesRepository {
    async fn add(&self, username: &Username, timetables: &Timetables) -> Result<(), RepositoryError> {
        // Single statement so a concurrent save can't interleave with a read-modify-write.
        sqlx::query(
            r#"
            INSERT INTO timetables (username, body)
            VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET body = EXCLUDED.body
            "#,
        )
        .bind(username.as_str())
        .bind(Json(timetables))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, username: &Username) -> Result<Option<Timetables>, RepositoryError> {
        let body: Option<Value> = sqlx::query_scalar("SELECT body FROM timetables WHERE username = $1")
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await?;

        body.map(|value| decode_body(username, value)).transpose()
    }
}

/// Decode a stored JSONB document; anything that doesn't fit is `Corrupt`.
fn decode_body(username: &Username, value: Value) -> Result<Timetables, RepositoryError> {
    serde_json::from_value(value)
        .map_err(|e| RepositoryError::corrupt(format!("timetables for '{}': {}", username, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Class, Period, Weekday};
    use serde_json::json;

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    #[test]
    fn stored_body_decodes() {
        let mut week = Timetables::default();
        let stored = serde_json::to_value(&week).unwrap();
        assert_eq!(decode_body(&alice(), stored).unwrap(), week);

        week = serde_json::from_value(json!({
            "mon": [{"kind": "full", "subject": "Math", "room": "", "memo": ""},
                    {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}],
            "tue": [{"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}],
            "wed": [{"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}],
            "thu": [{"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}],
            "fri": [{"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}, {"kind": "empty"}]
        }))
        .unwrap();
        let decoded = decode_body(&alice(), serde_json::to_value(&week).unwrap()).unwrap();
        assert_eq!(decoded.class(Weekday::Mon, Period::First), &Class::full("Math", "", ""));
    }

    #[test]
    fn malformed_body_is_corrupt() {
        for body in [
            json!({"mon": "not a day"}),
            json!([1, 2, 3]),
            json!(null),
            json!({"mon": [{"kind": "lunch"}], "tue": [], "wed": [], "thu": [], "fri": []}),
        ] {
            let err = decode_body(&alice(), body.clone()).unwrap_err();
            assert!(matches!(err, RepositoryError::Corrupt(_)), "{}", body);
        }
    }
}
