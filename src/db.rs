//! Database module
//!
//! SQLite connection and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;

/// Tables the server cannot run without
const REQUIRED_TABLES: &[&str] = &["squirrels"];

/// Open a connection pool for the configured database
///
/// The database file is created when it does not exist yet.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    connect_url(&config.database_url, config.database_max_connections).await
}

/// Open a connection pool for a SQLite URL
pub async fn connect_url(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // Every connection to `:memory:` sees its own database, so the pool
    // must hold exactly one connection and never recycle it.
    if url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Open a private in-memory database with the schema applied
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = connect_url("sqlite::memory:", 1).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the squirrels table if it is missing
///
/// AUTOINCREMENT keeps ids strictly increasing across deletes.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS squirrels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            size TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Verify database connectivity
pub async fn verify_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check if required tables exist
pub async fn check_schema(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    for table in REQUIRED_TABLES {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if count == 0 {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    Ok(true)
}
