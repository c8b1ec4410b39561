//! Extraction of bearer credentials from the `Authorization` header.

pub mod errors;

pub use errors::BearerError;

/// Exact scheme prefix required on the header, one trailing space included.
const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from an `Authorization` header value.
///
/// The header must start with the literal `"Bearer "` (case-sensitive,
/// exactly one space) followed by a non-empty remainder. Nothing else is
/// tolerated: no trimming, no case-insensitive matching. Deviations are
/// rejected rather than normalized so the contract stays unambiguous.
///
/// # Arguments
/// * `header` - The header value, or `None` when the header is absent
///
/// # Returns
/// The token portion of the header, valid for one request
///
/// # Errors
/// * `MissingCredential` - Header absent, empty, wrong prefix, or empty token
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, BearerError> {
    let header = header.ok_or(BearerError::MissingCredential)?;

    match header.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(BearerError::MissingCredential),
    }
}
