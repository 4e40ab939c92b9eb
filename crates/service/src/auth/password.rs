//! One-way password hashing.

use argon2::{Argon2, password_hash::{self, PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}

/// Hash + compare capability used by the sign-up and sign-in workflows.
pub trait PasswordEncoder: Send + Sync {
    /// Produce a salted, self-describing hash of `raw`.
    fn encode(&self, raw: &str) -> Result<String, PasswordError>;

    /// `Ok(false)` means a plain mismatch; `Err` means the check itself could not run.
    fn verify(&self, raw: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Argon2id with default parameters and PHC string output.
#[derive(Default, Clone)]
pub struct Argon2PasswordEncoder {
    argon: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    pub fn new() -> Self { Self::default() }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, raw: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;
        match self.argon.verify_password(raw.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::Hash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_plaintext_and_verifies() {
        let enc = Argon2PasswordEncoder::new();
        let hash = enc.encode("pw123").unwrap();
        assert_ne!(hash, "pw123");
        assert!(hash.starts_with("$argon2"));
        assert!(enc.verify("pw123", &hash).unwrap());
        assert!(!enc.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let enc = Argon2PasswordEncoder::new();
        assert_ne!(enc.encode("pw").unwrap(), enc.encode("pw").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error_not_a_mismatch() {
        let enc = Argon2PasswordEncoder::new();
        assert!(matches!(enc.verify("pw", "plain-text"), Err(PasswordError::MalformedHash(_))));
    }
}
