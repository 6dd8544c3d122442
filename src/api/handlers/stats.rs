//! Handlers for statistics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::SummaryResponse;
use crate::api::dto::url_mapping::UrlMappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record for a short code without counting a hit.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlMappingResponse>, AppError> {
    let mapping = state.shortener_service.stats(&code).await?;

    Ok(Json(mapping.into()))
}

/// Returns store-wide totals.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// { "totalUrls": 12, "totalClicks": 340, "averageClicks": 28 }
/// ```
pub async fn summary_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.shortener_service.summary().await?;

    Ok(Json(summary.into()))
}
