//! PostgreSQL store
//!
//! - create: plain INSERT, uniqueness left to the `users.username` constraint
//! - log: single query, optional bounds bound as NULL-able parameters

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Exercise, ExerciseFilter, NewExercise, Store, StoreError, User};
use crate::models::Username;

/// Store backed by a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and apply migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = super::create_pool_with_options(database_url, max_connections).await?;
        super::migrations::run(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: Username) -> Result<User, StoreError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            RETURNING id, username, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateUsername(username.into_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let result = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(exercise.user_id)
        .bind(exercise.description.as_str())
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => {
                Err(StoreError::NotFound {
                    resource: "user",
                    id: exercise.user_id.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        // LIMIT NULL is LIMIT ALL
        let rows = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit.map(i64::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{Description, Minutes};

    // Run with: DATABASE_URL=postgres://... cargo test -p extrack-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgStore::connect(&url, 2).await.expect("connect failed")
    }

    fn unique_name(prefix: &str) -> Username {
        Username::new(&format!("{}-{}", prefix, Uuid::new_v4())).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_username_rejected() {
        let store = store().await;
        let name = unique_name("dup");

        store.create_user(name.clone()).await.expect("first insert");
        let err = store.create_user(name).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(_)));

        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn exercise_for_missing_user_is_not_found() {
        let store = store().await;
        let err = store
            .create_exercise(NewExercise {
                user_id: Uuid::new_v4(),
                description: Description::new("ghost run").unwrap(),
                duration: Minutes::new(10.0).unwrap(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "user", .. }));

        store.close().await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn filter_and_limit() {
        let store = store().await;
        let user = store.create_user(unique_name("log")).await.unwrap();
        let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();

        for day in [5, 1, 3, 9] {
            store
                .create_exercise(NewExercise {
                    user_id: user.id,
                    description: Description::new(&format!("day {}", day)).unwrap(),
                    duration: Minutes::new(15.0).unwrap(),
                    date: d(day),
                })
                .await
                .unwrap();
        }

        let all = store
            .find_exercises(&ExerciseFilter::for_user(user.id))
            .await
            .unwrap();
        let dates: Vec<_> = all.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![d(1), d(3), d(5), d(9)]);

        let window = store
            .find_exercises(&ExerciseFilter {
                user_id: user.id,
                from: Some(d(3)),
                to: Some(d(5)),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(window.len(), 2);

        let capped = store
            .find_exercises(&ExerciseFilter {
                limit: Some(1),
                ..ExerciseFilter::for_user(user.id)
            })
            .await
            .unwrap();
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].date, d(1));

        store.close().await;
    }
}
