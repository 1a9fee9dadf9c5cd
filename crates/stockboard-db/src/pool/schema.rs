//! Schema bootstrap

use sqlx::PgPool;
use tracing::{info, instrument};

const INIT_SCHEMA: &str = include_str!("../../schema/0001_init.sql");

/// Create the `users`, `stocks` and `comments` tables when missing
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INIT_SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

/// Cheap connectivity probe used by readiness checks
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
