//! API route configuration.

use crate::api::handlers::{
    delete_handler, resolve_handler, shorten_handler, stats_handler, summary_handler,
    update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short code management routes.
///
/// # Endpoints
///
/// - `POST   /shorten`         - Create a short code
/// - `GET    /shorten/{code}`  - Resolve a short code (counts a hit)
/// - `PUT    /shorten/{code}`  - Replace the target URL
/// - `DELETE /shorten/{code}`  - Delete a short code
/// - `GET    /stats`           - Store-wide totals
/// - `GET    /stats/{code}`    - Record for a short code (no hit counted)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/{code}",
            get(resolve_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .route("/stats", get(summary_handler))
        .route("/stats/{code}", get(stats_handler))
}
