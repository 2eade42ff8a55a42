//! Domain types for the budget log.
//!
//! This module provides:
//! - `Username`, the only identity a record carries
//! - Job and Expense rows plus their insert forms
//! - In-process totals over fetched rows
//! - `ValidationError` for rejected input

pub mod expense;
pub mod job;
pub mod primitives;
pub mod validation;

pub use expense::{total_expenses, Expense, NewExpense};
pub use job::{total_pay, Job, NewJob};
pub use primitives::Username;
pub use validation::ValidationError;
