//! DTO for the update endpoint.

use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

/// Request body for `PUT /shorten/{code}`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    /// New destination URL for this short code.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(length(min = 1, max = 2048, message = "Invalid URL"))]
    pub url: String,
}
