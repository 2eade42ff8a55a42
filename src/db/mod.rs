//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite connection settings (journal mode, busy timeout)
//! - Repository layer opening one connection per operation

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{DeleteOutcome, Repository, ResetCounts};
