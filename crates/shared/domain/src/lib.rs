//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `Account` entity, its validation rules, and the credential hasher.

pub mod account;
pub mod constants;
pub mod error;
pub mod hasher;

pub use account::{is_valid_email, Account, AccountId};
pub use constants::*;
pub use error::{HashError, ValidationError};
pub use hasher::{Argon2Hasher, CredentialHasher};

#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockCredentialHasher;
