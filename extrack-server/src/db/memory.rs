//! In-process store
//!
//! Same contract as the Postgres store, tables held behind a RwLock.
//! Used by the test suite and by `extrack serve --in-memory`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Exercise, ExerciseFilter, NewExercise, Store, StoreError, User};
use crate::models::Username;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Store that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: Username) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == username.as_str()) {
            return Err(StoreError::DuplicateUsername(username.into_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.into_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == exercise.user_id) {
            return Err(StoreError::NotFound {
                resource: "user",
                id: exercise.user_id.to_string(),
            });
        }

        let row = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description.into_string(),
            duration: exercise.duration,
            date: exercise.date,
            created_at: Utc::now(),
        };
        tables.exercises.push(row.clone());
        Ok(row)
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        let tables = self.tables.read().await;

        let mut rows: Vec<Exercise> = tables
            .exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        // Stable sort keeps insertion order within a day
        rows.sort_by_key(|e| e.date);

        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }

        Ok(rows)
    }

    async fn close(&self) {
        let tables = self.tables.read().await;
        tracing::debug!(
            users = tables.users.len(),
            exercises = tables.exercises.len(),
            "dropping in-memory store"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{Description, Minutes};

    fn new_exercise(user_id: Uuid, description: &str, date: NaiveDate) -> NewExercise {
        NewExercise {
            user_id,
            description: Description::new(description).unwrap(),
            duration: Minutes::new(30.0).unwrap(),
            date,
        }
    }

    #[tokio::test]
    async fn users_listed_in_creation_order() {
        let store = MemoryStore::new();
        for name in ["carol", "alice", "bob"] {
            store.create_user(Username::new(name).unwrap()).await.unwrap();
        }

        let names: Vec<_> = store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let store = MemoryStore::new();
        store.create_user(Username::new("sam").unwrap()).await.unwrap();

        let err = store
            .create_user(Username::new("sam").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(name) if name == "sam"));
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn exercise_requires_existing_user() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let err = store
            .create_exercise(new_exercise(Uuid::new_v4(), "orphan", date))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "user", .. }));
    }

    #[tokio::test]
    async fn log_sorted_by_date_then_insertion() {
        let store = MemoryStore::new();
        let user = store.create_user(Username::new("kim").unwrap()).await.unwrap();
        let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();

        for (desc, day) in [("c", 3), ("a1", 1), ("b", 2), ("a2", 1)] {
            store
                .create_exercise(new_exercise(user.id, desc, d(day)))
                .await
                .unwrap();
        }

        let log: Vec<_> = store
            .find_exercises(&ExerciseFilter::for_user(user.id))
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(log, vec!["a1", "a2", "b", "c"]);

        let capped = store
            .find_exercises(&ExerciseFilter {
                limit: Some(2),
                ..ExerciseFilter::for_user(user.id)
            })
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);
    }
}
