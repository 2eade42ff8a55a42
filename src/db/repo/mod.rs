//! Repository layer for database operations.
//!
//! Every operation opens its own connection through `acquire_connection` and
//! closes it before returning, on success and on failure. Nothing is pooled.
//! Methods are organized across submodules by table:
//! - `jobs.rs` - Job inserts, reads and deletes
//! - `expenses.rs` - Expense inserts, reads and deletes

mod expenses;
mod jobs;

use crate::domain::Username;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::{info, warn};

/// Number of rows a delete statement removed.
///
/// Deletes that match nothing are not errors; callers that need strict
/// semantics inspect `is_noop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub rows_affected: u64,
}

impl DeleteOutcome {
    pub fn new(rows_affected: u64) -> Self {
        DeleteOutcome { rows_affected }
    }

    /// True when the statement matched zero rows.
    pub fn is_noop(&self) -> bool {
        self.rows_affected == 0
    }
}

/// Rows removed by a full reset of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCounts {
    pub jobs: u64,
    pub expenses: u64,
}

/// Repository for database operations.
pub struct Repository {
    options: SqliteConnectOptions,
}

impl Repository {
    /// Create a new repository from connection settings.
    pub fn new(options: SqliteConnectOptions) -> Self {
        Repository { options }
    }

    /// Open a fresh connection to the store.
    ///
    /// The caller owns the connection; repository methods hand it to
    /// `release` once their statement has run.
    pub async fn acquire_connection(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }

    /// Open a connection and ping it.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = conn.ping().await;
        release(conn).await;
        result
    }

    /// Delete every job and expense for a user.
    ///
    /// Both deletes share one transaction: if either fails, neither table
    /// changes.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn reset_user(&self, username: &Username) -> Result<ResetCounts, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = reset_user_in_tx(&mut conn, username).await;
        release(conn).await;
        let counts = result?;

        info!(
            username = %username,
            jobs = counts.jobs,
            expenses = counts.expenses,
            "Reset all records for user"
        );
        Ok(counts)
    }
}

async fn reset_user_in_tx(
    conn: &mut SqliteConnection,
    username: &Username,
) -> Result<ResetCounts, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let jobs = sqlx::query("DELETE FROM jobs WHERE username = ?")
        .bind(username.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let expenses = sqlx::query("DELETE FROM expenses WHERE username = ?")
        .bind(username.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(ResetCounts { jobs, expenses })
}

/// Close a per-operation connection.
///
/// A failed close is logged rather than returned; the statement result has
/// already been decided by then.
async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close SQLite connection");
    }
}
