//! Credential hashing.
//!
//! One-way transform from a plaintext secret to a storable hash. There is no
//! verify operation here: this crate only ever produces hashes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::HashError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential hasher trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret. Never returns or logs the input.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;
}

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
///
/// Every call draws a fresh salt, so hashing the same secret twice yields
/// different outputs.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the default Argon2 parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with custom cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    #[inline]
    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashError::new(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}
