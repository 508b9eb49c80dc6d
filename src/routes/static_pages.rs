use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::i18n::{self, Lang, Text};
use crate::models::VehicleDescriptor;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    lang: Lang,
}

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    text: &'static Text,
    lang: &'static str,
}

#[derive(Template)]
#[template(path = "predict.html")]
struct PredictTemplate {
    text: &'static Text,
    lang: &'static str,
    initial_json: String,
}

#[derive(Template)]
#[template(path = "debug.html")]
struct DebugTemplate {
    brand_count: usize,
    first_brand: String,
}

pub async fn landing_page(Query(query): Query<PageQuery>) -> Result<impl IntoResponse, AppError> {
    let template = LandingTemplate {
        text: i18n::text(query.lang),
        lang: query.lang.code(),
    };
    render(template)
}

pub async fn prediction_page(
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let initial = VehicleDescriptor::initial(&app_state.catalog);
    let initial_json = serde_json::to_string(&initial)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let template = PredictTemplate {
        text: i18n::text(query.lang),
        lang: query.lang.code(),
        initial_json,
    };
    render(template)
}

// Minimal diagnostics page: did the catalog load, and what does it hold.
pub async fn debug_page(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let template = DebugTemplate {
        brand_count: app_state.catalog.brand_count(),
        first_brand: app_state
            .catalog
            .first_brand()
            .unwrap_or("N/A")
            .to_string(),
    };
    render(template)
}

fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render template: {}", e);
            Err(AppError::Internal(anyhow::Error::new(e)))
        }
    }
}
