use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Issuer label stamped into every session token.
pub const ISSUER: &str = "chirpy";

/// Registered claims carried by a session token.
///
/// The payload is fixed: one principal, one purpose. All four fields are
/// mandatory; a token missing any of them fails verification as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer label, always [`ISSUER`]
    pub iss: String,

    /// Subject: principal identifier rendered as a UUID string
    pub sub: String,

    /// Issued at (Unix seconds)
    pub iat: i64,

    /// Expiration time (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a session starting at `issued_at` and lasting `lifetime`.
    pub fn new(subject: Uuid, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            iss: ISSUER.to_string(),
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }
}
