// usecase/timetables.rs - Create-or-replace and fetch of a user's weekly timetable

use std::sync::Arc;

use crate::domain::{Timetables, TimetablesRepository, Token};
use super::credential::AuthService;
use super::error::UsecaseError;

#[derive(Clone)]
pub struct TimetablesUsecase {
    auth: AuthService,
    timetables: Arc<dyn TimetablesRepository>,
}

impl TimetablesUsecase {
    pub fn new(auth: AuthService, timetables: Arc<dyn TimetablesRepository>) -> Self {
        Self { auth, timetables }
    }

    /// Replace the caller's whole week. Slots are never merged.
    pub async fn add(&self, token: &Token, timetables: Timetables) -> Result<(), UsecaseError> {
        let user = self.auth.authorize(token).await?;
        self.timetables.add(&user, &timetables).await?;
        tracing::debug!("Saved timetables for user '{}'", user);
        Ok(())
    }

    pub async fn get(&self, token: &Token) -> Result<Timetables, UsecaseError> {
        let user = self.auth.authorize(token).await?;
        self.timetables
            .get(&user)
            .await?
            .ok_or(UsecaseError::TimetablesNotFound)
    }
}
