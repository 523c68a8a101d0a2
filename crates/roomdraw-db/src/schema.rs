//! Schema DDL execution.
//!
//! The DDL lives in `sql/` files embedded at compile time and is executed
//! file by file in dependency order (suites before rooms, which reference
//! them). Creation is idempotent (`IF NOT EXISTS` throughout); dropping
//! removes everything, rooms first.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

const DROP_TABLES: &str = include_str!("../sql/drop_tables.sql");

/// `(table name, DDL)` in creation order.
const CREATE_TABLES: [(&str, &str); 4] = [
    ("suites", include_str!("../sql/create_suites.sql")),
    ("suite_groups", include_str!("../sql/create_suite_groups.sql")),
    ("users", include_str!("../sql/create_users.sql")),
    ("rooms", include_str!("../sql/create_rooms.sql")),
];

/// Creates all tables and indexes.
pub async fn create_all(pool: &PgPool) -> Result<()> {
    for (table, ddl) in CREATE_TABLES {
        sqlx::raw_sql(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create table {table}"))?;
        info!(table, "created table");
    }
    Ok(())
}

/// Drops every table this toolkit owns.
pub async fn drop_all(pool: &PgPool) -> Result<()> {
    sqlx::raw_sql(DROP_TABLES)
        .execute(pool)
        .await
        .context("Failed to drop tables")?;
    info!("dropped all tables");
    Ok(())
}

/// Drops and recreates the whole schema.
pub async fn recreate_all(pool: &PgPool) -> Result<()> {
    drop_all(pool).await?;
    create_all(pool).await
}
