//! Exercise and log endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{Exercise, ExerciseFilter, NewExercise, Store, User};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonOrForm, UserId, ValidQuery};
use crate::http::server::AppState;
use crate::models::{
    CalendarDate, Description, LogQuery, LogQueryParams, Minutes, RawNumber, ValidationError,
};

/// Log exercise request
#[derive(Deserialize)]
pub struct LogExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<RawNumber>,
    pub date: Option<String>,
}

/// Logged exercise response
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: Minutes,
    pub date: CalendarDate,
}

/// One entry of a user's log
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: Minutes,
    pub date: CalendarDate,
}

impl From<Exercise> for LogEntry {
    fn from(e: Exercise) -> Self {
        Self {
            description: e.description,
            duration: e.duration,
            date: CalendarDate(e.date),
        }
    }
}

/// Exercise log response
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub id: Uuid,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

async fn require_user(store: &dyn Store, id: Uuid) -> Result<User, ApiError> {
    store.find_user(id).await?.ok_or_else(|| ApiError::NotFound {
        resource: "user",
        id: id.to_string(),
    })
}

/// POST /api/users/{id}/exercises - log an exercise for a user
async fn log_exercise(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    JsonOrForm(req): JsonOrForm<LogExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let description = Description::new(req.description.as_deref().unwrap_or_default())?;
    let duration = req
        .duration
        .as_ref()
        .ok_or(ValidationError::Empty { field: "duration" })
        .and_then(Minutes::parse)?;
    let date = match req.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => state.calendar.parse_date("date", raw)?,
        _ => state.calendar.today(),
    };

    let user = require_user(state.store.as_ref(), user_id).await?;
    let exercise = state
        .store
        .create_exercise(NewExercise {
            user_id: user.id,
            description,
            duration,
            date,
        })
        .await?;
    tracing::debug!(%user_id, exercise_id = %exercise.id, "exercise logged");

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: CalendarDate(exercise.date),
    }))
}

/// GET /api/users/{id}/logs - a user's exercises, optionally bounded
async fn get_logs(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    ValidQuery(params): ValidQuery<LogQueryParams>,
) -> Result<Json<LogResponse>, ApiError> {
    let query = LogQuery::parse(&params, &state.calendar)?;
    let user = require_user(state.store.as_ref(), user_id).await?;

    let exercises = state
        .store
        .find_exercises(&ExerciseFilter::with_query(user.id, query))
        .await?;
    let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();

    Ok(Json(LogResponse {
        username: user.username,
        id: user.id,
        count: log.len(),
        log,
    }))
}

/// Exercise routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/exercises", post(log_exercise))
        .route("/users/{id}/logs", get(get_logs))
}
