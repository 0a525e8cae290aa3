mod sqlite_repository;


pub use sqlite_repository::create_sqlite_repository;

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS administrators (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  username TEXT NOT NULL UNIQUE,
  password_hash TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS visitor_records (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  first_name TEXT NOT NULL CHECK (length(first_name) > 0),
  last_name TEXT NOT NULL CHECK (length(last_name) > 0),
  reason TEXT NOT NULL CHECK (length(reason) > 0),
  visited_at TEXT NOT NULL
)"#,
    "CREATE INDEX IF NOT EXISTS idx_visitor_records_visited_at ON visitor_records (visited_at)",
];

/// Opens the SQLite pool described by `config`, creating the file if needed.
///
/// An in-memory database exists per connection, so it is pinned to a single
/// connection that is never recycled.
pub async fn connect_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    // ---
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout);
    let pool_options = if config.is_in_memory() {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(config.max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .context("Failed to open SQLite database")?;

    tracing::info!("Connected to database at {}", config.database_url);
    Ok(pool)
}

/// Creates the tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to initialize database schema")?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}

/// Connects and prepares the schema in one step.
pub async fn init_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    // ---
    let pool = connect_database(config).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
