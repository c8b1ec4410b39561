//! Stateless session authentication core
//!
//! Provides the authentication subsystem of the chirpy backend:
//! - Password hashing and verification (bcrypt)
//! - Signed, expiring session tokens (HS256 JWT)
//! - Bearer credential extraction from the `Authorization` header
//!
//! The HTTP layer, persistence, and configuration stay outside this crate.
//! The signing secret and token lifetime arrive as call parameters, and the
//! current time comes from an injectable [`Clock`], so every operation is a
//! pure function that can be tested with arbitrary secrets and timestamps.
//! All components are stateless and safe for unbounded concurrent use.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use chirpy_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Session Tokens
//! ```
//! use chirpy_auth::TokenHandler;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let handler = TokenHandler::new();
//! let user_id = Uuid::new_v4();
//! let token = handler.issue(user_id, b"signing-secret", Duration::hours(1)).unwrap();
//! assert_eq!(handler.verify(&token, b"signing-secret").unwrap(), user_id);
//! ```
//!
//! ## Complete Login and Request Flow
//! ```
//! use chirpy_auth::Authenticator;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new();
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a session token
//! let user_id = Uuid::new_v4();
//! let login = auth
//!     .login("password123", &hash, user_id, b"signing-secret", Duration::hours(1))
//!     .unwrap();
//!
//! // Authenticated request: extract and verify the bearer credential
//! let header = format!("Bearer {}", login.access_token);
//! let subject = auth.authenticate_request(Some(&header), b"signing-secret").unwrap();
//! assert_eq!(subject, user_id);
//! ```

pub mod authenticator;
pub mod bearer;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::extract_bearer_token;
pub use bearer::BearerError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::MAX_PASSWORD_BYTES;
pub use token::Claims;
pub use token::Clock;
pub use token::SystemClock;
pub use token::TokenError;
pub use token::TokenHandler;
pub use token::ISSUER;
