//! Domain-level constants.
//!
//! These constants define validation requirements for accounts.

// =============================================================================
// Field names
// =============================================================================

/// Username field, as reported in validation errors
pub const FIELD_USERNAME: &str = "username";

/// Email field, as reported in validation errors
pub const FIELD_EMAIL: &str = "email";

/// Credential hash field, as reported in validation errors
pub const FIELD_CREDENTIAL_HASH: &str = "credential_hash";

// =============================================================================
// Validation
// =============================================================================

/// Accepted email shape.
///
/// Lowercase only, with a 2 to 4 letter top-level domain. Mixed-case
/// addresses and longer TLDs such as `.museum` are rejected.
pub const EMAIL_PATTERN: &str = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$";
