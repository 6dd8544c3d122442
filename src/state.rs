//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::PgUrlMappingRepository;

/// Cloneable handle to the process-wide services.
///
/// Holds no per-request state; the connection pool lives inside the repository.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<PgUrlMappingRepository>>,
}

impl AppState {
    /// Creates the state from an already wired service.
    pub fn new(shortener_service: Arc<ShortenerService<PgUrlMappingRepository>>) -> Self {
        Self { shortener_service }
    }
}
