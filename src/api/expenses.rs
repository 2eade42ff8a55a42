use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::extract::{DeleteOptions, RecordId, UserParam, ValidJson, ValidQuery};
use super::responses::{CreatedResponse, DeletedResponse};
use super::AppState;
use crate::domain::{total_expenses, Expense, NewExpense, Username, ValidationError};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub username: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<CreateExpenseRequest> for NewExpense {
    type Error = ValidationError;

    fn try_from(req: CreateExpenseRequest) -> Result<Self, Self::Error> {
        if !req.amount.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "amount",
                reason: "must be a finite number".to_string(),
            });
        }
        Ok(NewExpense {
            username: Username::parse(req.username)?,
            amount: req.amount,
            description: req.description,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesResponse {
    pub expenses: Vec<Expense>,
    pub total_expenses: f64,
}

pub async fn list_expenses(
    State(state): State<AppState>,
    UserParam(username): UserParam,
) -> Result<Json<ExpensesResponse>, AppError> {
    let expenses = state.repo.expenses_for_user(&username).await?;
    let total_expenses = total_expenses(&expenses).ok_or_else(|| {
        AppError::Internal(format!("total expenses for {} is not a finite number", username))
    })?;

    Ok(Json(ExpensesResponse {
        expenses,
        total_expenses,
    }))
}

pub async fn create_expense(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let expense = NewExpense::try_from(req)?;
    let id = state.repo.insert_expense(&expense).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Expense added successfully",
            id,
        }),
    ))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidQuery(options): ValidQuery<DeleteOptions>,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state.repo.delete_expense(id).await?;
    if options.strict && outcome.is_noop() {
        return Err(AppError::NotFound(format!("expense {}", id)));
    }

    Ok(Json(DeletedResponse {
        message: "Expense deleted successfully",
        deleted: outcome.rows_affected,
    }))
}

pub async fn reset_expenses(
    State(state): State<AppState>,
    UserParam(username): UserParam,
) -> Result<Json<DeletedResponse>, AppError> {
    let outcome = state.repo.delete_expenses_for_user(&username).await?;

    Ok(Json(DeletedResponse {
        message: "All expenses reset for user",
        deleted: outcome.rows_affected,
    }))
}
