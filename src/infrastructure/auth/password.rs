//! Argon2 password hashing
//!
//! Hashes are stored as PHC strings on the user row, so the salt and
//! parameters travel with the hash and verification needs no extra state.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a stored hash
    ///
    /// A hash that fails to parse counts as a failed match, so corrupt
    /// rows reject the login instead of erroring.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2-based password hasher with default parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("hunter2hunter2").unwrap();

        assert!(hasher.verify("hunter2hunter2", &hash));
        assert!(!hasher.verify("hunter3hunter3", &hash));
    }

    #[test]
    fn test_hash_is_phc_encoded() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("hunter2hunter2").unwrap();

        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_salts_are_random() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("hunter2hunter2").unwrap();
        let second = hasher.hash("hunter2hunter2").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("hunter2hunter2", &first));
        assert!(hasher.verify("hunter2hunter2", &second));
    }

    #[test]
    fn test_malformed_hash_rejects() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("hunter2hunter2", "not-a-phc-string"));
        assert!(!hasher.verify("hunter2hunter2", ""));
    }
}
