use chrono::Duration;
use uuid::Uuid;

use crate::bearer::extract_bearer_token;
use crate::bearer::BearerError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Clock;
use crate::token::SystemClock;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining password verification, session token
/// issuance, and bearer credential checks.
///
/// The signing secret is a parameter on every call rather than construction
/// state: this crate never reads configuration itself, it receives the
/// process-wide secret from the surrounding system.
pub struct Authenticator<C = SystemClock> {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler<C>,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Signed session token to hand back to the client
    pub access_token: String,
}

/// Authentication operation errors.
///
/// All variants are terminal; authentication failures are never transient.
/// The HTTP layer collapses every variant to a generic unauthorized or
/// server-error response so failure kinds are never disclosed to clients.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Credential error: {0}")]
    Bearer(#[from] BearerError),
}

impl Authenticator<SystemClock> {
    /// Create an authenticator that reads the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Authenticator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Authenticator<C> {
    /// Create an authenticator with an injected clock for token lifetimes.
    pub fn with_clock(clock: C) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_handler: TokenHandler::with_clock(clock),
        }
    }

    /// Hash a password for storage (registration flow).
    ///
    /// # Errors
    /// * `PasswordError` - Hashing failed or the input is too long
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a login password and issue a session token.
    ///
    /// A password that does not match the stored hash always produces
    /// `InvalidCredentials` — never a success result.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented at login
    /// * `stored_hash` - Hash on record for the user
    /// * `user_id` - Principal identifier to bind into the token
    /// * `secret` - Process-wide signing secret
    /// * `lifetime` - Token lifetime, already bounded by the caller
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash unreadable or hashing failure
    /// * `Token` - Token signing failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: Uuid,
        secret: &[u8],
        lifetime: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.password_hasher.verify(password, stored_hash) {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::debug!(%user_id, "login rejected: password mismatch");
                return Err(AuthenticationError::InvalidCredentials);
            }
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "login failed: unreadable stored hash");
                return Err(err.into());
            }
        }

        let access_token = self.token_handler.issue(user_id, secret, lifetime)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Authenticate an inbound request from its `Authorization` header.
    ///
    /// Extracts the bearer credential and verifies it, returning the
    /// principal identifier. The distinguished failure kind is logged here;
    /// callers surface only a generic unauthorized response.
    ///
    /// # Arguments
    /// * `authorization` - Raw header value, or `None` when absent
    /// * `secret` - Process-wide signing secret
    ///
    /// # Errors
    /// * `Bearer` - Header absent or malformed
    /// * `Token` - Token malformed, tampered, expired, or mis-signed
    pub fn authenticate_request(
        &self,
        authorization: Option<&str>,
        secret: &[u8],
    ) -> Result<Uuid, AuthenticationError> {
        let token = extract_bearer_token(authorization).map_err(|err| {
            tracing::debug!(error = %err, "request rejected: no bearer credential");
            err
        })?;

        let subject = self.token_handler.verify(token, secret).map_err(|err| {
            tracing::debug!(error = %err, "request rejected: token verification failed");
            err
        })?;

        Ok(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"testing-secret";

    #[test]
    fn test_login_success() {
        let authenticator = Authenticator::new();
        let password = "Testity123!1";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let user_id = Uuid::new_v4();
        let result = authenticator
            .login(password, &hash, user_id, SECRET, Duration::hours(1))
            .expect("Login failed");

        assert!(!result.access_token.is_empty());
    }

    #[test]
    fn test_login_wrong_password() {
        let authenticator = Authenticator::new();
        let hash = authenticator
            .hash_password("Testity123!1")
            .expect("Failed to hash password");

        let result = authenticator.login(
            "wrong_password",
            &hash,
            Uuid::new_v4(),
            SECRET,
            Duration::hours(1),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unreadable_hash() {
        let authenticator = Authenticator::new();

        let result = authenticator.login(
            "Testity123!1",
            "not-a-bcrypt-hash",
            Uuid::new_v4(),
            SECRET,
            Duration::hours(1),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::Password(
                PasswordError::MalformedHash(_)
            ))
        ));
    }

    #[test]
    fn test_authenticate_request_rejects_bad_headers() {
        let authenticator = Authenticator::new();

        let result = authenticator.authenticate_request(None, SECRET);
        assert!(matches!(result, Err(AuthenticationError::Bearer(_))));

        let result = authenticator.authenticate_request(Some("garbage"), SECRET);
        assert!(matches!(result, Err(AuthenticationError::Bearer(_))));

        let result = authenticator.authenticate_request(Some("Bearer not.a.token"), SECRET);
        assert!(matches!(result, Err(AuthenticationError::Token(_))));
    }

    #[test]
    fn test_full_authentication_flow() {
        let authenticator = Authenticator::new();
        let password = "Testity123!1";
        let user_id = Uuid::new_v4();

        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");
        let login = authenticator
            .login(password, &hash, user_id, SECRET, Duration::hours(1))
            .expect("Login failed");

        let header = format!("Bearer {}", login.access_token);
        let subject = authenticator
            .authenticate_request(Some(&header), SECRET)
            .expect("Request authentication failed");

        assert_eq!(subject, user_id);
    }
}
