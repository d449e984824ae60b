//! Password hashing.
//!
//! [`PasswordHasher`] is the seam handlers use; [`BcryptHasher`] is the only
//! production implementation. Verification goes through bcrypt's own
//! comparison, never through string equality on hashes or plaintext.

use crate::errors::AppError;

pub trait PasswordHasher: Send + Sync + 'static {
    /// Produces a salted one-way digest of `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// Checks `plaintext` against a digest produced by [`PasswordHasher::hash`].
    ///
    /// Returns `Ok(false)` on mismatch and `Err` only when `digest` is unusable.
    fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, AppError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, AppError> {
        bcrypt::verify(plaintext, digest)
            .map_err(|e| AppError::internal(format!("Failed to verify password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn test_hash_differs_from_plaintext() {
        let digest = hasher().hash("p").unwrap();
        assert_ne!(digest, "p");
        assert!(digest.starts_with("$2"));
    }

    #[test]
    fn test_verify_round_trip() {
        let h = hasher();
        let digest = h.hash("correct horse").unwrap();
        assert!(h.verify(&digest, "correct horse").unwrap());
        assert!(!h.verify(&digest, "battery staple").unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert!(hasher().verify("not-a-bcrypt-hash", "p").is_err());
    }
}
