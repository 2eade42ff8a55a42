//! Recorded work sessions.

use serde::Serialize;

use super::Username;

/// A stored work session.
///
/// `pay` is read back from the `Pay` generated column, so it always equals
/// `hours * rate` as computed by SQLite. Row keys keep the `Hours`/`Rate`/`Pay`
/// casing the web client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub username: Username,
    #[serde(rename = "Hours")]
    pub hours: f64,
    #[serde(rename = "Rate")]
    pub rate: f64,
    #[serde(rename = "Pay")]
    pub pay: f64,
}

/// A work session to be inserted. SQLite derives pay from these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub username: Username,
    pub hours: f64,
    pub rate: f64,
}

/// Sum of `pay` over the given jobs; `0.0` for none.
///
/// Returns `None` when the sum is not a finite number, since JSON has no
/// representation for it.
pub fn total_pay(jobs: &[Job]) -> Option<f64> {
    let total: f64 = jobs.iter().map(|job| job.pay).sum();
    total.is_finite().then_some(total)
}
