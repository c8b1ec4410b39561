use super::errors::PasswordError;

/// Longest password bcrypt will digest without truncating.
///
/// Silent truncation is a security hazard, so longer inputs are rejected
/// outright instead of being fed to the algorithm.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Uses bcrypt at its default cost with a random per-call salt. Stateless
/// and safe to share across request handlers; both operations are CPU-bound
/// for the duration of the cost factor, so callers on an async runtime
/// should dispatch them to a blocking pool.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// A self-describing bcrypt hash string (cost and salt embedded)
    ///
    /// # Errors
    /// * `Hashing` - Input exceeds [`MAX_PASSWORD_BYTES`], or the hashing
    ///   operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::Hashing(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Recomputes the digest with the salt embedded in `hash`; the
    /// comparison is constant-time inside the bcrypt crate.
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the hash
    /// * `MalformedHash` - `hash` is not a readable bcrypt string
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        match bcrypt::verify(password, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::Mismatch),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Testity123!1";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash).is_ok());
        assert!(matches!(
            hasher.verify("TestityTest321!1", &hash),
            Err(PasswordError::Mismatch)
        ));
    }

    #[test]
    fn test_salt_is_randomized() {
        let hasher = PasswordHasher::new();
        let password = "Testity123!1";

        let hash1 = hasher.hash(password).expect("Failed to hash password");
        let hash2 = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(hash1, hash2);
        assert!(hasher.verify(password, &hash1).is_ok());
        assert!(hasher.verify(password, &hash2).is_ok());
    }

    #[test]
    fn test_verify_against_wrong_hash() {
        let hasher = PasswordHasher::new();
        let hash = hasher
            .hash("TestityTestTest123!1")
            .expect("Failed to hash password");

        assert!(matches!(
            hasher.verify("Testity123!1", &hash),
            Err(PasswordError::Mismatch)
        ));
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();

        for hash in ["", "invalidHash", "$2b$12$tooshort"] {
            let result = hasher.verify("Testity123!1", hash);
            assert!(
                matches!(result, Err(PasswordError::MalformedHash(_))),
                "expected malformed hash error for {:?}, got {:?}",
                hash,
                result
            );
        }
    }

    #[test]
    fn test_length_limit() {
        let hasher = PasswordHasher::new();

        let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = hasher.hash(&at_limit).expect("Failed to hash at the limit");
        assert!(hasher.verify(&at_limit, &hash).is_ok());

        let over_limit = "a".repeat(MAX_PASSWORD_BYTES + 1);
        assert!(matches!(
            hasher.hash(&over_limit),
            Err(PasswordError::Hashing(_))
        ));
    }
}
