use thiserror::Error;

/// Error type for bearer credential extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    /// The Authorization header is absent, empty, lacks the `Bearer ` prefix,
    /// or carries nothing after it.
    #[error("Missing or malformed bearer credential")]
    MissingCredential,
}
