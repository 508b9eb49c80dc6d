// Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

mod api;
mod static_pages;

pub fn create_router(app_state: AppState) -> Router {
    // JSON API consumed by the prediction form.
    let api_router = Router::new()
        .route("/brands", get(api::get_brands))
        .route("/options", post(api::resolve))
        .route("/estimate", post(api::estimate))
        .route("/predict", post(api::predict))
        .with_state(app_state.clone());

    Router::new()
        .route("/", get(static_pages::landing_page))
        .route("/predict", get(static_pages::prediction_page))
        .route("/debug", get(static_pages::debug_page))
        .route("/health", get(api::health))
        .nest("/api", api_router)
        .with_state(app_state)
}
