//! Embedded migration runner.

use sqlx::PgPool;
use tracing::info;

use taskboard_core::error::{AppError, ErrorKind};

/// Applies any pending migrations from the workspace `migrations/`
/// directory. Safe to call on every startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Database schema is up to date");
    Ok(())
}