//! Database layer - store trait, connection pool, and backends

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod records;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Username;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use records::{Exercise, ExerciseFilter, NewExercise, User};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Persistence gateway for users and exercises.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Insert a user. Fails with `DuplicateUsername` if the name is taken.
    async fn create_user(&self, username: Username) -> Result<User, StoreError>;

    /// All users, oldest first.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert an exercise. The owning user must exist.
    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError>;

    /// Exercises matching the filter, ordered by date then insertion.
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self);
}
