// database/memory.rs - In-process stores behind the repository ports
//
// Used by the test-suite and by STORAGE_BACKEND=memory. Each call takes the
// lock once, so every operation is atomic and writes to the same key are
// serialized.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Credential, CredentialRepository, RepositoryError, Task, TaskId, TaskRepository, Timetables,
    TimetablesRepository, Token, Username,
};

/// Stored as raw strings, like a database row, so reads re-validate.
#[derive(Debug, Clone)]
struct CredentialRow {
    username: String,
    token: String,
}

#[derive(Default)]
pub struct MemoryCredentialRepository {
    rows: RwLock<Vec<CredentialRow>>,
}

impl MemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn insert_raw(&self, username: &str, token: &str) {
        self.rows.write().await.push(CredentialRow {
            username: username.to_string(),
            token: token.to_string(),
        });
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    async fn append(&self, credential: &Credential) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.token == credential.token().as_str()) {
            return Err(RepositoryError::InvalidInput("token already in use".to_string()));
        }
        rows.push(CredentialRow {
            username: credential.username().as_str().to_string(),
            token: credential.token().as_str().to_string(),
        });
        Ok(())
    }

    async fn remove(&self, username: &Username) -> Result<(), RepositoryError> {
        self.rows
            .write()
            .await
            .retain(|row| row.username != username.as_str());
        Ok(())
    }

    async fn exists(&self, token: &Token) -> Result<bool, RepositoryError> {
        Ok(self.rows.read().await.iter().any(|row| row.token == token.as_str()))
    }

    async fn get_by_token(&self, token: &Token) -> Result<Option<Credential>, RepositoryError> {
        let rows = self.rows.read().await;
        match rows.iter().find(|row| row.token == token.as_str()) {
            Some(row) => Ok(Some(Credential::from_stored(row.username.clone(), row.token.clone())?)),
            None => Ok(None),
        }
    }

    async fn get_by_username(&self, username: &Username) -> Result<Option<Credential>, RepositoryError> {
        let rows = self.rows.read().await;
        match rows.iter().find(|row| row.username == username.as_str()) {
            Some(row) => Ok(Some(Credential::from_stored(row.username.clone(), row.token.clone())?)),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
struct TaskTable {
    last_id: i64,
    rows: BTreeMap<TaskId, (Username, Task)>,
}

#[derive(Default)]
pub struct MemoryTaskRepository {
    table: RwLock<TaskTable>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn create(&self, username: &Username, task: &Task) -> Result<TaskId, RepositoryError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = TaskId::new(table.last_id).map_err(|e| RepositoryError::storage(e.to_string()))?;
        table.rows.insert(id, (username.clone(), task.clone().with_id(id)));
        Ok(id)
    }

    async fn get_all(&self, username: &Username) -> Result<Vec<Task>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|(owner, _)| owner == username)
            .map(|(_, task)| task.clone())
            .collect())
    }

    async fn remove(&self, username: &Username, id: i64) -> Result<(), RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::InvalidInput(format!("invalid id {}", id)));
        }
        let id = TaskId::new(id).map_err(|e| RepositoryError::InvalidInput(e.to_string()))?;
        let mut table = self.table.write().await;
        if matches!(table.rows.get(&id), Some((owner, _)) if owner == username) {
            table.rows.remove(&id);
        }
        Ok(())
    }

    async fn remove_all(&self, username: &Username) -> Result<(), RepositoryError> {
        self.table
            .write()
            .await
            .rows
            .retain(|_, (owner, _)| owner != username);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTimetablesRepository {
    weeks: RwLock<HashMap<Username, Timetables>>,
}

impl MemoryTimetablesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TimetablesRepository for MemoryTimetablesRepository {
    async fn add(&self, username: &Username, timetables: &Timetables) -> Result<(), RepositoryError> {
        self.weeks
            .write()
            .await
            .insert(username.clone(), timetables.clone());
        Ok(())
    }

    async fn get(&self, username: &Username) -> Result<Option<Timetables>, RepositoryError> {
        Ok(self.weeks.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[tokio::test]
    async fn credential_remove_is_noop_without_records() {
        let store = MemoryCredentialRepository::new();
        store.remove(&user("nobody")).await.unwrap();
    }

    #[tokio::test]
    async fn a_token_maps_to_one_user() {
        let store = MemoryCredentialRepository::new();
        store
            .append(&Credential::new(user("alice"), Token::new("t1")))
            .await
            .unwrap();
        let err = store
            .append(&Credential::new(user("bob"), Token::new("t1")))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn corrupt_username_surfaces_as_invalid_username() {
        let store = MemoryCredentialRepository::new();
        store.insert_raw("", "t9").await;
        let err = store.get_by_token(&Token::new("t9")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidUsername(_)));
    }

    #[tokio::test]
    async fn task_ids_are_assigned_ascending() {
        let store = MemoryTaskRepository::new();
        let alice = user("alice");
        let task = Task::new(-1, "2024-05-05", "read").unwrap();
        let a = store.create(&alice, &task).await.unwrap();
        let b = store.create(&alice, &task).await.unwrap();
        assert!(a < b);

        let ids: Vec<_> = store.get_all(&alice).await.unwrap().iter().map(Task::id).collect();
        assert_eq!(ids, vec![Some(a), Some(b)]);
    }

    #[tokio::test]
    async fn task_remove_rejects_non_positive_ids() {
        let store = MemoryTaskRepository::new();
        for id in [0, -1] {
            let err = store.remove(&user("alice"), id).await.unwrap_err();
            assert!(matches!(err, RepositoryError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn task_remove_only_touches_the_owners_row() {
        let store = MemoryTaskRepository::new();
        let (alice, bob) = (user("alice"), user("bob"));
        let id = store
            .create(&alice, &Task::new(-1, "2024-05-05", "read").unwrap())
            .await
            .unwrap();

        store.remove(&bob, id.get()).await.unwrap();
        assert_eq!(store.get_all(&alice).await.unwrap().len(), 1);

        store.remove(&alice, id.get()).await.unwrap();
        assert!(store.get_all(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn timetables_add_overwrites() {
        let store = MemoryTimetablesRepository::new();
        let alice = user("alice");
        assert!(store.get(&alice).await.unwrap().is_none());

        store.add(&alice, &Timetables::default()).await.unwrap();
        assert_eq!(store.get(&alice).await.unwrap(), Some(Timetables::default()));
    }
}
