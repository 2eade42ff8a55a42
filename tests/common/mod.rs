//! Router setup shared by the endpoint tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use budget_log::api::{self, AppState};
use budget_log::db::init_db;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub async fn setup_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let repo = init_db(&db_path).await.expect("init_db failed");
    let state = AppState::new(Arc::new(repo));

    (api::create_router(state), temp_dir)
}

pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(raw) => builder
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
