//! Handlers for a single short code: resolve, update, delete.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::update_url::UpdateUrlRequest;
use crate::api::dto::url_mapping::UrlMappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code and returns its record.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// Counts as a hit: the access counter is incremented and the returned
/// `accessCount` already includes this request.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlMappingResponse>, AppError> {
    let mapping = state.shortener_service.resolve(&code).await?;

    Ok(Json(mapping.into()))
}

/// Points a short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com" }
/// ```
///
/// The short code, `createdAt` and `accessCount` are unchanged; `updatedAt` is
/// refreshed.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn update_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlMappingResponse>, AppError> {
    payload.validate()?;

    let mapping = state.shortener_service.update(&code, payload.url).await?;

    Ok(Json(mapping.into()))
}

/// Permanently deletes a short code.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist or was already deleted.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shortener_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
