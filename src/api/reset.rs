use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::extract::UserParam;
use super::AppState;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub message: &'static str,
    pub deleted_jobs: u64,
    pub deleted_expenses: u64,
}

/// Wipe every job and expense recorded under one username.
pub async fn reset_all(
    State(state): State<AppState>,
    UserParam(username): UserParam,
) -> Result<Json<ResetResponse>, AppError> {
    let counts = state.repo.reset_user(&username).await?;

    Ok(Json(ResetResponse {
        message: "All data reset for user",
        deleted_jobs: counts.jobs,
        deleted_expenses: counts.expenses,
    }))
}
