//! HTTP client for the expense prediction service
//!
//! Single request/response exchange against a configurable base address.
//! No retry, no fallback value: any failure — connection, status, or a
//! response without the expected field — surfaces as
//! `PredictionUnavailable` so the caller can show that state instead of
//! a stale number.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlannerError, PlannerResult};

/// Request body for `POST /predict`
#[derive(Debug, Serialize)]
struct PredictRequest {
    /// Six monthly totals, oldest to newest
    #[serde(rename = "monthlyExpenses")]
    monthly_expenses: Vec<f64>,
}

/// Response body from the prediction service
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(rename = "predictedExpense")]
    predicted_expense: f64,
}

/// Client for the remote prediction endpoint
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http_client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Request timeout; the service fits a tiny model, so anything slower
    /// than this is effectively down
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client for the given service base address
    pub fn new(base_url: &str) -> Self {
        let http_client = Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base address, normalized without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service for the predicted next-month expense
    ///
    /// `history` is the six monthly totals, oldest to newest, sent as
    /// `{"monthlyExpenses": [...]}`. Returns the single numeric field of
    /// the response.
    pub fn predict_next_month(&self, history: &[f64; 6]) -> PlannerResult<f64> {
        let url = format!("{}/predict", self.base_url);
        debug!(%url, ?history, "requesting prediction");

        let response = self
            .http_client
            .post(&url)
            .json(&PredictRequest {
                monthly_expenses: history.to_vec(),
            })
            .send()
            .map_err(|e| {
                warn!(%url, error = %e, "prediction request failed");
                PlannerError::PredictionUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "prediction service returned an error status");
            return Err(PlannerError::PredictionUnavailable(format!(
                "service returned {}",
                status
            )));
        }

        let body: PredictResponse = response.json().map_err(|e| {
            warn!(%url, error = %e, "prediction response was malformed");
            PlannerError::PredictionUnavailable(format!("malformed response: {}", e))
        })?;

        if !body.predicted_expense.is_finite() {
            return Err(PlannerError::PredictionUnavailable(
                "service returned a non-finite value".to_string(),
            ));
        }

        debug!(predicted = body.predicted_expense, "prediction received");
        Ok(body.predicted_expense)
    }
}
