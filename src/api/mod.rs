pub mod expenses;
pub mod extract;
pub mod health;
pub mod jobs;
pub mod reset;
pub mod responses;

use crate::db::Repository;
use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/api/jobs",
            get(jobs::list_jobs)
                .post(jobs::create_job)
                .delete(jobs::reset_jobs),
        )
        .route("/api/jobs/:id", delete(jobs::delete_job))
        .route(
            "/api/expenses",
            get(expenses::list_expenses)
                .post(expenses::create_expense)
                .delete(expenses::reset_expenses),
        )
        .route("/api/expenses/:id", delete(expenses::delete_expense))
        .route("/api/reset", delete(reset::reset_all))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
