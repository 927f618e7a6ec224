use std::collections::BTreeSet;

use crate::Authority;

/// Verified identity attached to a single request.
///
/// Request-scoped and discarded when the request completes; never persisted
/// or shared across requests. The constructor is crate-private: outside
/// this crate the only way to obtain a `SecurityContext` is successful
/// token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    subject: String,
    authorities: BTreeSet<Authority>,
}

impl SecurityContext {
    pub(crate) fn new(subject: String, authorities: BTreeSet<Authority>) -> Self {
        Self {
            subject,
            authorities,
        }
    }

    /// The verified principal identifier.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Authorities carried by the verified token.
    pub fn authorities(&self) -> &BTreeSet<Authority> {
        &self.authorities
    }

    /// Exact-match authority check for downstream authorization decisions.
    pub fn has_authority(&self, name: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == name)
    }
}
