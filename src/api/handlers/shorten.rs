//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url_mapping::UrlMappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the new record (`accessCount` is `0`).
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or not an absolute http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<UrlMappingResponse>), AppError> {
    payload.validate()?;

    let mapping = state.shortener_service.shorten(payload.url).await?;

    Ok((StatusCode::CREATED, Json(mapping.into())))
}
