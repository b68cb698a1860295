//! Schema setup for the users and exercises tables

use sqlx::PgPool;

/// Apply the schema. Safe to run on every start.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exercises (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            description TEXT NOT NULL,
            duration DOUBLE PRECISION NOT NULL CHECK (duration > 0),
            date DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created before fractional minutes stored INTEGER durations
    sqlx::query("ALTER TABLE exercises ALTER COLUMN duration TYPE DOUBLE PRECISION")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_exercises_user_date ON exercises (user_id, date)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
