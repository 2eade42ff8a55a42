//! Recorded outlays.

use serde::Serialize;

use super::Username;

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub username: Username,
    pub amount: f64,
    pub description: Option<String>,
}

/// An expense to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub username: Username,
    pub amount: f64,
    pub description: Option<String>,
}

/// Sum of `amount` over the given expenses; `0.0` for none.
///
/// Returns `None` when the sum is not a finite number.
pub fn total_expenses(expenses: &[Expense]) -> Option<f64> {
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    total.is_finite().then_some(total)
}
