//! Expense operations.

use super::{release, DeleteOutcome, Repository};
use crate::domain::{Expense, NewExpense, Username};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

impl Repository {
    /// Insert an expense and return its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_expense(&self, expense: &NewExpense) -> Result<i64, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result =
            sqlx::query("INSERT INTO expenses (username, amount, description) VALUES (?, ?, ?)")
                .bind(expense.username.as_str())
                .bind(expense.amount)
                .bind(expense.description.as_deref())
                .execute(&mut conn)
                .await;
        release(conn).await;

        let id = result?.last_insert_rowid();
        info!(id, username = %expense.username, "Inserted expense");
        Ok(id)
    }

    /// Query all expenses for a user, oldest first.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row cannot be decoded.
    pub async fn expenses_for_user(
        &self,
        username: &Username,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query(
            r#"
            SELECT id, amount, description
            FROM expenses
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
            .map(|row| expense_from_row(row, username))
            .collect()
    }

    /// Delete one expense by id, regardless of owner.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_expense(&self, id: i64) -> Result<DeleteOutcome, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = DeleteOutcome::new(result?.rows_affected());
        info!(id, rows = outcome.rows_affected, "Deleted expense");
        Ok(outcome)
    }

    /// Delete every expense for a user.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_expenses_for_user(
        &self,
        username: &Username,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut conn = self.acquire_connection().await?;
        let result = sqlx::query("DELETE FROM expenses WHERE username = ?")
            .bind(username.as_str())
            .execute(&mut conn)
            .await;
        release(conn).await;

        let outcome = DeleteOutcome::new(result?.rows_affected());
        info!(username = %username, rows = outcome.rows_affected, "Deleted expenses for user");
        Ok(outcome)
    }
}

fn expense_from_row(row: &SqliteRow, username: &Username) -> Result<Expense, sqlx::Error> {
    Ok(Expense {
        id: row.try_get("id")?,
        username: username.clone(),
        amount: row.try_get("amount")?,
        description: row.try_get("description")?,
    })
}
