//! Prediction service boundary
//!
//! One outbound HTTP call: `POST /predict` with six monthly totals,
//! returning a single predicted next-month expense. The client performs
//! the exchange; the worker runs it off the UI thread and tags outcomes
//! so superseded requests can be discarded.

pub mod client;
pub mod worker;

pub use client::PredictionClient;
pub use worker::{PredictionOutcome, PredictionWorker};

/// The five fixed historical monthly totals, oldest first
///
/// Placeholder history the dashboard sends ahead of the live ledger
/// total until real month-over-month tracking exists.
pub const HISTORY_PLACEHOLDERS: [f64; 5] = [20000.0, 22000.0, 24000.0, 26000.0, 28000.0];

/// Assemble the six-element history: placeholders plus the current total
/// spent, in oldest-to-newest order
pub fn prediction_history(current_total_spent: f64) -> [f64; 6] {
    let [a, b, c, d, e] = HISTORY_PLACEHOLDERS;
    [a, b, c, d, e, current_total_spent]
}
