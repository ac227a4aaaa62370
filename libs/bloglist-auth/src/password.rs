use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("password hashing failed")]
pub struct HashError(#[source] argon2::password_hash::Error);

/// One-way password hashing with Argon2id.
///
/// Hashing is CPU-bound and deliberately slow; callers on async executors
/// should run it on a blocking thread.
#[derive(Default, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// The salt is randomized per call, so hashing the same plaintext twice
    /// yields different strings.
    ///
    /// # Errors
    /// Returns `HashError` if the underlying hasher fails.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(HashError)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed hash verifies as `false`; this never returns an error to
    /// the caller.
    #[must_use]
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            tracing::debug!("stored password hash is malformed");
            return false;
        };

        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}
