//! Account domain entity and related types.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::constants::{EMAIL_PATTERN, FIELD_CREDENTIAL_HASH, FIELD_EMAIL, FIELD_USERNAME};
use crate::error::ValidationError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Opaque account identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Account domain entity
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Assigned by the store on creation (None until then)
    pub id: Option<AccountId>,
    pub username: String,
    pub email: String,
    /// Output of the credential hasher, never the plaintext
    pub credential_hash: String,
}

// Keep the hash out of log output
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("credential_hash", &"[REDACTED]")
            .finish()
    }
}

impl Account {
    /// Create a new, not yet persisted account.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            credential_hash: credential_hash.into(),
        }
    }

    /// Record the identifier assigned by the store.
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check that the account's fields meet the basic requirements.
    ///
    /// Checks run in a fixed order and the first failure wins: username,
    /// email presence, email shape, credential hash.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::MissingField(FIELD_USERNAME));
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingField(FIELD_EMAIL));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidFormat(FIELD_EMAIL));
        }
        if self.credential_hash.is_empty() {
            return Err(ValidationError::MissingField(FIELD_CREDENTIAL_HASH));
        }
        Ok(())
    }
}

/// Check an address against [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
