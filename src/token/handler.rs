use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;

/// Issues and verifies signed, expiring session tokens.
///
/// Tokens are JWTs signed with HS256 over a fixed claims payload
/// ([`Claims`]). The signing secret is never held by the handler: it is a
/// parameter on every call, so the same handler serves any secret and tests
/// can use arbitrary ones. The handler owns only the pinned algorithm and
/// the clock used for expiry checks.
pub struct TokenHandler<C = SystemClock> {
    algorithm: Algorithm,
    clock: C,
}

impl TokenHandler<SystemClock> {
    /// Create a handler that reads the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TokenHandler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TokenHandler<C> {
    /// Create a handler with an injected clock.
    ///
    /// Issuance timestamps and expiry checks both go through `clock`,
    /// making token lifetimes deterministically testable.
    pub fn with_clock(clock: C) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    /// Issue a signed session token for `subject`.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier bound into the token
    /// * `secret` - Symmetric signing secret
    /// * `lifetime` - Requested token lifetime; the surrounding system bounds
    ///   it, no clamping happens here
    ///
    /// # Returns
    /// Compact JWT string (`header.payload.signature`, base64url segments)
    ///
    /// # Errors
    /// * `Signing` - Internal signing failure (never on valid input)
    pub fn issue(
        &self,
        subject: Uuid,
        secret: &[u8],
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, self.clock.now(), lifetime);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &EncodingKey::from_secret(secret))
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a presented token and return its subject.
    ///
    /// Pure function of (token, secret, clock): no hidden state, no side
    /// effects. The signature is checked before any claim is trusted, and
    /// expiry is checked against the injected clock rather than the JWT
    /// library's ambient system time.
    ///
    /// # Errors
    /// * `Malformed` - Not three decodable dot-separated segments
    /// * `UnexpectedAlgorithm` - Header declares an algorithm other than HS256
    /// * `SignatureMismatch` - MAC does not verify against `secret`
    /// * `Expired` - Current time is at or past the `exp` claim
    /// * `InvalidSubject` - `sub` claim is not a valid UUID
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<Uuid, TokenError> {
        // Pin the algorithm ourselves before decoding. Trusting a library
        // default here would leave algorithm-confusion rejection implicit.
        let header = decode_header(token).map_err(|e| TokenError::Malformed(e.to_string()))?;
        if header.alg != self.algorithm {
            return Err(TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
        }

        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::InvalidAlgorithm => {
                    TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg))
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        let claims = data.claims;
        if self.clock.now().timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Uuid::parse_str(&claims.sub).map_err(|e| TokenError::InvalidSubject(e.to_string()))
    }
}
