//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG and encoded as URL-safe base64
//! without padding. They are not derived from the URL and are not sequential, so
//! neighbouring codes cannot be enumerated.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
pub const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated code in characters.
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES * 4 / 3;

/// Generates a random short code.
///
/// Produces an 8-character code from the `[A-Za-z0-9_-]` alphabet (48 bits of
/// entropy). Collisions are possible and are resolved by the store's uniqueness
/// constraint.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Random source unavailable",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
