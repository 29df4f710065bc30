//! Apply the cars table DDL. Idempotent: CREATE TABLE IF NOT EXISTS.

use crate::error::StoreError;
use crate::sql;
use sqlx::SqlitePool;

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
    let ddl = sql::create_table();
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = sql::CARS_TABLE, "migrations applied");
    Ok(())
}
