//! Database migrations and initialization.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqliteSynchronous};
use sqlx::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use super::Repository;

/// Initialize the SQLite database and return a repository bound to it.
///
/// Creates the file (and a missing parent directory) on first run. Existing
/// tables and rows are left untouched.
pub async fn init_db(db_path: &str) -> Result<Repository, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let options = connect_options(db_path);
    let mut conn = SqliteConnection::connect_with(&options).await?;
    let migrated = run_migrations(&mut conn).await;
    conn.close().await?;
    migrated?;

    info!("Database initialized successfully at {}", db_path);
    Ok(Repository::new(options))
}

/// Connection settings applied to every per-request connection.
///
/// The busy timeout lets concurrent writers wait for the file lock instead of
/// failing with `SQLITE_BUSY`.
pub fn connect_options(db_path: &str) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
}

/// Run all database migrations.
async fn run_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&mut *conn).await?;
        }
    }

    info!("Migrations completed successfully");
    Ok(())
}
