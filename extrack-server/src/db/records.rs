//! Record shapes stored by the persistence gateway

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{Description, LogQuery, Minutes};

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Exercise record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: Minutes,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new exercise
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: Description,
    pub duration: Minutes,
    pub date: NaiveDate,
}

/// Filter for a user's exercise log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl ExerciseFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    pub fn with_query(user_id: Uuid, query: LogQuery) -> Self {
        Self {
            user_id,
            from: query.from,
            to: query.to,
            limit: query.limit,
        }
    }

    /// Whether an exercise passes the user and date bounds (limit not applied).
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.map_or(true, |from| exercise.date >= from)
            && self.to.map_or(true, |to| exercise.date <= to)
    }
}
