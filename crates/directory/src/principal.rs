use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use gatekit_auth::{Authority, PrincipalRecord};
use gatekit_core::{DomainError, DomainResult};

/// Authority granted to every newly registered principal.
pub const DEFAULT_AUTHORITY: &str = "ROLE_USER";

/// A principal stored by the directory.
///
/// Identifiers are email addresses, normalized (trimmed, lowercased) at
/// registration so lookups are case-insensitive. The secret hash is opaque
/// outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identifier: String,
    pub secret_hash: String,
    pub authorities: BTreeSet<Authority>,
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// The record shape the auth core's port consumes.
    pub fn record(&self) -> PrincipalRecord {
        PrincipalRecord {
            identifier: self.identifier.clone(),
            secret_hash: self.secret_hash.clone(),
            authorities: self.authorities.clone(),
        }
    }
}

/// Normalize and validate a registration identifier.
pub fn normalize_identifier(email: &str) -> DomainResult<String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("invalid email format"));
    }

    Ok(email.to_lowercase())
}

/// Validate a registration secret (minimum 8 characters).
pub fn validate_secret(secret: &str) -> DomainResult<()> {
    if secret.chars().count() < 8 {
        return Err(DomainError::validation(
            "secret must be at least 8 characters",
        ));
    }

    Ok(())
}
