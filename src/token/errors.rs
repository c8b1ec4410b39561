use thiserror::Error;

/// Error type for session token operations.
///
/// Every variant is terminal for the request being served. The HTTP layer
/// collapses all of them to a generic unauthorized response; the variants
/// exist so the failure kind can be logged server-side.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not verify")]
    SignatureMismatch,

    #[error("Token is expired")]
    Expired,

    #[error("Token declares unexpected signing algorithm {0}")]
    UnexpectedAlgorithm(String),

    #[error("Token subject is not a valid principal identifier: {0}")]
    InvalidSubject(String),
}
