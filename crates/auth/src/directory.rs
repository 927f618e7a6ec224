//! Credential directory port.
//!
//! The directory is an external collaborator: it stores principal records
//! and owns secret verification. This crate only consumes the two
//! primitives below; it never inspects `secret_hash` itself.

use std::collections::BTreeSet;

use crate::Authority;

/// A principal as stored by the credential directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalRecord {
    /// Unique identifier (an email address).
    pub identifier: String,

    /// Opaque secret hash. Compared only via [`CredentialDirectory::verify_secret`].
    pub secret_hash: String,

    /// Authorities granted to the principal.
    pub authorities: BTreeSet<Authority>,
}

/// Lookup and secret verification, implemented by the directory service.
pub trait CredentialDirectory: Send + Sync {
    /// Find a principal by identifier.
    fn lookup(&self, identifier: &str) -> Option<PrincipalRecord>;

    /// Verify a supplied secret against the record's stored hash.
    fn verify_secret(&self, record: &PrincipalRecord, secret: &str) -> bool;
}
