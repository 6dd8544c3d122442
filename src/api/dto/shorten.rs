//! DTO for the shorten endpoint.

use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

/// Request body for `POST /shorten`.
///
/// A missing, `null` or non-string `url` deserializes to an empty string and is
/// rejected as an invalid URL rather than a malformed body.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(length(min = 1, max = 2048, message = "Invalid URL"))]
    pub url: String,
}
