//! Table maintenance: enumerate and drop every user table in a store

use crate::error::Result;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// List the names of all tables in the store, internal ones included
pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(tables)
}

/// Drop every user-created table, skipping SQLite's internal tables
/// (`sqlite_sequence` and friends cannot be dropped).
///
/// Returns the names of the dropped tables.
pub async fn drop_all_tables(pool: &SqlitePool) -> Result<Vec<String>> {
    let mut dropped = Vec::new();

    for table in list_tables(pool).await? {
        if table.starts_with("sqlite_") {
            debug!("Skipping internal table {}", table);
            continue;
        }

        let statement = format!("DROP TABLE IF EXISTS {}", quote_identifier(&table));
        sqlx::query(&statement).execute(pool).await?;

        info!("Dropped table {}", table);
        dropped.push(table);
    }

    Ok(dropped)
}

/// Quote an identifier for interpolation into DDL
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
