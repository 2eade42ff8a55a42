mod common;

use axum::http::StatusCode;
use common::{request, setup_test_app};
use serde_json::{json, Value};

async fn add_expense(app: &axum::Router, body: Value) -> i64 {
    let (status, json) = request(app, "POST", "/api/expenses", Some(body.to_string().as_str())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Expense added successfully");
    json["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_unknown_user_has_no_expenses() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = request(&app, "GET", "/api/expenses?username=nobody", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["expenses"], json!([]));
    assert_eq!(json["totalExpenses"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_total_expenses_sums_amounts() {
    let (app, _temp) = setup_test_app().await;
    add_expense(&app, json!({"username": "alice", "amount": 10.5, "description": "lunch"})).await;
    add_expense(&app, json!({"username": "alice", "amount": 4.25, "description": "coffee"})).await;

    let (status, json) = request(&app, "GET", "/api/expenses?username=alice", None).await;
    assert_eq!(status, StatusCode::OK);

    let expenses = json["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0]["amount"].as_f64(), Some(10.5));
    assert_eq!(expenses[0]["description"], "lunch");
    assert_eq!(expenses[1]["description"], "coffee");

    let total = json["totalExpenses"].as_f64().unwrap();
    assert!((total - 14.75).abs() < 1e-9);
}

#[tokio::test]
async fn test_description_is_optional() {
    let (app, _temp) = setup_test_app().await;
    add_expense(&app, json!({"username": "alice", "amount": 3})).await;
    add_expense(&app, json!({"username": "alice", "amount": 2, "description": null})).await;

    let (_status, json) = request(&app, "GET", "/api/expenses?username=alice", None).await;
    let expenses = json["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 2);
    assert!(expenses[0]["description"].is_null());
    assert!(expenses[1]["description"].is_null());
    assert_eq!(expenses[0]["username"], "alice");
    assert_eq!(json["totalExpenses"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn test_expenses_are_scoped_by_username() {
    let (app, _temp) = setup_test_app().await;
    add_expense(&app, json!({"username": "alice", "amount": 1.0})).await;
    add_expense(&app, json!({"username": "bob", "amount": 99.0})).await;

    let (_status, json) = request(&app, "GET", "/api/expenses?username=bob", None).await;
    let expenses = json["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["username"], "bob");
    assert_eq!(json["totalExpenses"].as_f64(), Some(99.0));
}

#[tokio::test]
async fn test_delete_expense_by_id() {
    let (app, _temp) = setup_test_app().await;
    let id = add_expense(&app, json!({"username": "alice", "amount": 8.0})).await;

    let (status, json) = request(&app, "DELETE", &format!("/api/expenses/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Expense deleted successfully");
    assert_eq!(json["deleted"], 1);

    let (status, json) = request(&app, "DELETE", &format!("/api/expenses/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Expense deleted successfully");
    assert_eq!(json["deleted"], 0);

    let (_status, json) = request(&app, "GET", "/api/expenses?username=alice", None).await;
    assert_eq!(json["expenses"], json!([]));
}

#[tokio::test]
async fn test_strict_delete_of_missing_expense_is_404() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = request(&app, "DELETE", "/api/expenses/42?strict=true", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "expense 42 not found");

    let (status, _json) = request(&app, "DELETE", "/api/expenses/42?strict=false", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_strict_flag_is_400() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) = request(&app, "DELETE", "/api/expenses/1?strict=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_reset_expenses_for_user_only() {
    let (app, _temp) = setup_test_app().await;
    add_expense(&app, json!({"username": "alice", "amount": 1.0})).await;
    add_expense(&app, json!({"username": "bob", "amount": 2.0})).await;

    let (status, json) = request(&app, "DELETE", "/api/expenses?username=alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "All expenses reset for user");
    assert_eq!(json["deleted"], 1);

    let (_status, json) = request(&app, "GET", "/api/expenses?username=bob", None).await;
    assert_eq!(json["expenses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_expense_body_is_400() {
    let (app, _temp) = setup_test_app().await;

    let (status, json) =
        request(&app, "POST", "/api/expenses", Some(r#"{"username": "alice"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("amount"));

    let (status, _json) = request(&app, "POST", "/api/expenses", Some("[]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = request(&app, "GET", "/api/expenses", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "username is required");
}

#[tokio::test]
async fn test_overflowing_total_expenses_is_500_not_null() {
    let (app, _temp) = setup_test_app().await;
    add_expense(&app, json!({"username": "big", "amount": 1e308})).await;
    add_expense(&app, json!({"username": "big", "amount": 1e308})).await;

    let (status, json) = request(&app, "GET", "/api/expenses?username=big", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal_error");
    assert!(json.get("totalExpenses").is_none());
}
