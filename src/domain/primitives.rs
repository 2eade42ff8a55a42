//! Domain primitives: Username.

use serde::Serialize;

use super::ValidationError;

/// Owner of a record. Any non-blank string; there is no account behind it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username. Surrounding whitespace is kept as-is,
    /// but a username made only of whitespace is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        Ok(Username(raw))
    }

    /// Get the username as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
