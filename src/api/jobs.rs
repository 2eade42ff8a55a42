use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::extract::{DeleteOptions, RecordId, UserParam, ValidJson, ValidQuery};
use super::responses::{CreatedResponse, DeletedResponse};
use super::AppState;
use crate::domain::{total_pay, Job, NewJob, Username, ValidationError};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub username: String,
    pub hours: f64,
    pub rate: f64,
}

impl TryFrom<CreateJobRequest> for NewJob {
    type Error = ValidationError;

    fn try_from(req: CreateJobRequest) -> Result<Self, Self::Error> {
        // SQLite would store an infinite Pay, which JSON cannot carry.
        if !(req.hours * req.rate).is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "hours",
                reason: "hours × rate is too large".to_string(),
            });
        }
        Ok(NewJob {
            username: Username::parse(req.username)?,
            hours: req.hours,
            rate: req.rate,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
    pub total_pay: f64,
}

pub async fn list_jobs(
    State(state): State<AppState>,
    UserParam(username): UserParam,
) -> Result<Json<JobsResponse>, AppError> {
    let jobs = state.repo.jobs_for_user(&username).await?;
    let total_pay = total_pay(&jobs).ok_or_else(|| {
        AppError::Internal(format!("total pay for {} is not a finite number", username))
    })?;

    Ok(Json(JobsResponse { jobs, total_pay }))
}

pub async fn create_job(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let job = NewJob::try_from(req)?;
    let id = state.repo.insert_job(&job).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Job added successfully",
            id,
        }),
    ))
}

pub async fn delete_job(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidQuery(options): ValidQuery<DeleteOptions>,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state.repo.delete_job(id).await?;
    if options.strict && outcome.is_noop() {
        return Err(AppError::NotFound(format!("job {}", id)));
    }

    Ok(Json(DeletedResponse {
        message: "Job deleted successfully",
        deleted: outcome.rows_affected,
    }))
}

pub async fn reset_jobs(
    State(state): State<AppState>,
    UserParam(username): UserParam,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state.repo.delete_jobs_for_user(&username).await?;

    Ok(Json(DeletedResponse {
        message: "All jobs reset for user",
        deleted: outcome.rows_affected,
    }))
}
