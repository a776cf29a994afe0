//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (gRPC, database).

use thiserror::Error;

/// Reasons an account fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field did not have the expected shape
    #[error("invalid {0} format")]
    InvalidFormat(&'static str),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) | ValidationError::InvalidFormat(field) => field,
        }
    }
}

/// The credential hasher could not produce a hash.
///
/// The message comes from the hashing primitive and never contains the
/// plaintext.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HashError(pub String);

impl HashError {
    pub fn new(msg: impl Into<String>) -> Self {
        HashError(msg.into())
    }
}
