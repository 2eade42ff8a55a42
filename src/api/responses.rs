//! Bodies shared by the mutation endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub deleted: u64,
}
