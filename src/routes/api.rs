// Handlers for backend API endpoints

use axum::{
    extract::{Json as JsonExtract, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{PriceEstimate, PredictionResponse, VehicleDescriptor},
    options::{ResolvedOptions, resolve_options},
    predictor, pricing,
};

// --- Request/Response Structs ---

#[derive(Debug, Deserialize)]
pub struct OptionsRequest {
    pub brand: String,
    pub model: String,
    pub current: VehicleDescriptor,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    brands: usize,
}

// --- API Handlers ---

pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        brands: app_state.catalog.brand_count(),
    })
}

pub async fn get_brands(State(app_state): State<AppState>) -> impl IntoResponse {
    let brands: Vec<String> = app_state
        .catalog
        .brand_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    tracing::debug!("[HANDLER] /api/brands - returning {} brands", brands.len());
    Json(brands)
}

/// Re-derive the valid option sets after a brand or model change.
pub async fn resolve(
    State(app_state): State<AppState>,
    JsonExtract(request): JsonExtract<OptionsRequest>,
) -> Json<ResolvedOptions> {
    tracing::info!(
        "[HANDLER] /api/options - brand: {}, model: {}",
        request.brand,
        request.model
    );
    let resolved = resolve_options(
        &app_state.catalog,
        &request.brand,
        &request.model,
        &request.current,
    );
    Json(resolved)
}

/// Local heuristic estimate, used as an offline fallback.
pub async fn estimate(
    JsonExtract(details): JsonExtract<VehicleDescriptor>,
) -> AppResult<Json<PriceEstimate>> {
    validate(&details)?;
    let details = details.normalized();
    tracing::info!(
        "[HANDLER] /api/estimate - {} {}",
        details.brand,
        details.model
    );
    Ok(Json(pricing::estimate_price(&details)))
}

/// Authoritative estimate from the external prediction service.
pub async fn predict(
    State(app_state): State<AppState>,
    JsonExtract(details): JsonExtract<VehicleDescriptor>,
) -> AppResult<Json<PredictionResponse>> {
    validate(&details)?;
    let details = details.normalized();
    tracing::info!(
        "[HANDLER] /api/predict - {} {}",
        details.brand,
        details.model
    );
    let prediction = predictor::predict(
        &app_state.http_client,
        &app_state.settings.predictor_base_url,
        &details,
    )
    .await?;
    Ok(Json(prediction))
}

fn validate(details: &VehicleDescriptor) -> AppResult<()> {
    if details.model.trim().is_empty() {
        return Err(AppError::Validation("Please select a model".to_string()));
    }
    Ok(())
}
