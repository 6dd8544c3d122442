//! Target URL validation.
//!
//! URLs are validated but never rewritten: the stored value is exactly what the
//! client submitted, so a resolve returns the same string that was shortened.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute `http` or `https` URL.
///
/// Special schemes always carry a host once parsed, so a successful parse with an
/// allowed scheme is sufficient. Whitespace and control characters are refused
/// anywhere in the input: the parser would silently strip or escape them, leaving
/// a stored value that is not a valid `Location` header.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UrlValidationError::InvalidFormat(
            "contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
