use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Hashing failed, including inputs over the bcrypt length limit.
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// The plaintext does not match the stored hash.
    #[error("Password does not match")]
    Mismatch,

    /// The stored hash is not a recognizable bcrypt string.
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
