//! Job operations.

use super::{release, DeleteOutcome, Repository};
use crate::domain::{Job, NewJob, Username};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

impl Repository {
    /// Insert a job and return its assigned id.
    ///
    /// Only `Hours` and `Rate` are written; SQLite fills `Pay`.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_job(&self, job: &NewJob) -> Result<i64, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query("INSERT INTO jobs (username, Hours, Rate) VALUES (?, ?, ?)")
            .bind(job.username.as_str())
            .bind(job.hours)
            .bind(job.rate)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let id = result?.last_insert_rowid();
        info!(id, username = %job.username, "Inserted job");
        Ok(id)
    }

    /// Query all jobs for a user, oldest first.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row cannot be decoded.
    pub async fn jobs_for_user(&self, username: &Username) -> Result<Vec<Job>, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query(
            r#"
            SELECT id, Hours, Rate, Pay
            FROM jobs
            WHERE username = ?
            ORDER BY id ASC
            "#,
        )
        .bind(username.as_str())
        .fetch_all(&mut conn)
        .await;
        release(conn).await;

        result?
            .iter()
            .map(|row| job_from_row(row, username))
            .collect()
    }

    /// Delete one job by id, regardless of owner.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_job(&self, id: i64) -> Result<DeleteOutcome, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = DeleteOutcome::new(result?.rows_affected());
        info!(id, rows = outcome.rows_affected, "Deleted job");
        Ok(outcome)
    }

    /// Delete every job for a user.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_jobs_for_user(
        &self,
        username: &Username,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query("DELETE FROM jobs WHERE username = ?")
            .bind(username.as_str())
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = DeleteOutcome::new(result?.rows_affected());
        info!(username = %username, rows = outcome.rows_affected, "Deleted jobs for user");
        Ok(outcome)
    }
}

fn job_from_row(row: &SqliteRow, username: &Username) -> Result<Job, sqlx::Error> {
    Ok(Job {
        id: row.try_get("id")?,
        username: username.clone(),
        hours: row.try_get("Hours")?,
        rate: row.try_get("Rate")?,
        pay: row.try_get("Pay")?,
    })
}
