//! Input validation errors shared by the domain constructors and the API extractors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}
