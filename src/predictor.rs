// Client for the external prediction service. One request, one response:
// no retry, no cancellation. Transport failures and upstream rejections map
// to distinct user-visible errors.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{PredictionResponse, VehicleDescriptor};

// Error body shape the service uses for non-success responses.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<String>,
}

/// POST the descriptor to `{base_url}/predict` and relay the prediction.
pub async fn predict(
    client: &Client,
    base_url: &str,
    details: &VehicleDescriptor,
) -> AppResult<PredictionResponse> {
    let url = format!("{}/predict", base_url.trim_end_matches('/'));
    tracing::debug!("Requesting prediction from {}", url);

    let response = client
        .post(&url)
        .json(details)
        .send()
        .await
        .map_err(AppError::PredictorUnreachable)?;

    let status = response.status();
    if !status.is_success() {
        // Prefer the server-supplied message when the body carries one.
        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Prediction request failed with status {}", status));
        return Err(AppError::Upstream(message));
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|_| AppError::Upstream("Prediction service returned an invalid response".to_string()))
}
