use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Tables this service reads and writes. `user_answers` holds one row per
/// (user, interview, question) so re-answering updates in place.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS interviews (
        id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id     TEXT NOT NULL,
        position    TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        experience  INT  NOT NULL DEFAULT 0,
        tech_stack  TEXT NOT NULL,
        interviewer_style TEXT NOT NULL DEFAULT 'Neutral',
        questions   JSONB NOT NULL DEFAULT '[]'::jsonb,
        focus_areas TEXT[] NOT NULL DEFAULT '{}',
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at  TIMESTAMPTZ
    )
    "#,
    // columns added after the first release
    "ALTER TABLE interviews ADD COLUMN IF NOT EXISTS interviewer_style TEXT NOT NULL DEFAULT 'Neutral'",
    "ALTER TABLE interviews ADD COLUMN IF NOT EXISTS updated_at TIMESTAMPTZ",
    "CREATE INDEX IF NOT EXISTS interviews_user_recent ON interviews (user_id, created_at DESC)",
    r#"
    CREATE TABLE IF NOT EXISTS user_answers (
        id                 UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id            TEXT NOT NULL,
        interview_id       UUID NOT NULL REFERENCES interviews (id) ON DELETE CASCADE,
        question           TEXT NOT NULL,
        correct_ans        TEXT NOT NULL,
        user_ans           TEXT NOT NULL,
        feedback           TEXT NOT NULL,
        rating             INT  NOT NULL,
        confidence_overall INT,
        confidence_text    INT,
        confidence_speech  INT,
        confidence_webcam  INT,
        created_at         TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at         TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (user_id, interview_id, question)
    )
    "#,
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates missing tables and indexes. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to apply schema statement")?;
    }
    info!("Database schema verified ({} statements)", SCHEMA.len());
    Ok(())
}
