//! In-memory principal store.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use chrono::Utc;

use gatekit_auth::{Authority, CredentialDirectory, PrincipalRecord};
use gatekit_core::{DomainError, DomainResult};

use crate::hash;
use crate::principal::{DEFAULT_AUTHORITY, Principal, normalize_identifier, validate_secret};

/// Directory backed by a process-local map.
///
/// Keyed by normalized identifier. Interior mutability so the gateway can
/// share one instance across request tasks.
#[derive(Default)]
pub struct InMemoryDirectory {
    principals: RwLock<HashMap<String, Principal>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new principal with the default authority.
    ///
    /// Fails with `Conflict` when the identifier is already taken and with
    /// `Validation` on a malformed email or a too-short secret.
    pub fn register(&self, email: &str, secret: &str) -> DomainResult<Principal> {
        let identifier = normalize_identifier(email)?;
        validate_secret(secret)?;

        let mut principals = self.principals.write().unwrap();
        if principals.contains_key(&identifier) {
            return Err(DomainError::conflict(format!(
                "principal '{identifier}' already exists"
            )));
        }

        let principal = Principal {
            identifier: identifier.clone(),
            secret_hash: hash::hash_secret(secret)?,
            authorities: BTreeSet::from([Authority::new(DEFAULT_AUTHORITY)]),
            created_at: Utc::now(),
        };
        principals.insert(identifier.clone(), principal.clone());

        tracing::info!(identifier = %identifier, "principal registered");
        Ok(principal)
    }

    /// Seed the default admin principal if it does not exist yet.
    ///
    /// Idempotent: an already-present identifier is left untouched.
    pub fn seed_admin(&self, email: &str, secret: &str) -> DomainResult<()> {
        let identifier = normalize_identifier(email)?;

        let mut principals = self.principals.write().unwrap();
        if principals.contains_key(&identifier) {
            tracing::info!(identifier = %identifier, "admin principal already exists, nothing to do");
            return Ok(());
        }

        tracing::info!(identifier = %identifier, "seeding default admin principal");
        let principal = Principal {
            identifier: identifier.clone(),
            secret_hash: hash::hash_secret(secret)?,
            authorities: BTreeSet::from([
                Authority::new("ROLE_ADMIN"),
                Authority::new(DEFAULT_AUTHORITY),
            ]),
            created_at: Utc::now(),
        };
        principals.insert(identifier, principal);

        Ok(())
    }

    /// All principals, ordered by identifier.
    pub fn list(&self) -> Vec<Principal> {
        let mut all: Vec<Principal> = self.principals.read().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        all
    }
}

impl CredentialDirectory for InMemoryDirectory {
    fn lookup(&self, identifier: &str) -> Option<PrincipalRecord> {
        let identifier = identifier.trim().to_lowercase();
        self.principals
            .read()
            .unwrap()
            .get(&identifier)
            .map(Principal::record)
    }

    fn verify_secret(&self, record: &PrincipalRecord, secret: &str) -> bool {
        hash::verify_secret(secret, &record.secret_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_lookup() {
        let dir = InMemoryDirectory::new();
        dir.register("Alice@Example.com", "a-long-secret").unwrap();

        let record = dir.lookup("alice@example.com").unwrap();
        assert_eq!(record.identifier, "alice@example.com");
        assert!(record.authorities.contains(&Authority::new("ROLE_USER")));
        assert!(dir.verify_secret(&record, "a-long-secret"));
        assert!(!dir.verify_secret(&record, "wrong"));
    }

    #[test]
    fn duplicate_registration_conflicts() {
        let dir = InMemoryDirectory::new();
        dir.register("alice@example.com", "a-long-secret").unwrap();

        let result = dir.register("ALICE@example.com", "another-secret");
        assert!(matches!(result, Err(DomainError::Conflict(_))));
    }

    #[test]
    fn registration_validation() {
        let dir = InMemoryDirectory::new();

        assert!(matches!(
            dir.register("no-at-sign", "a-long-secret"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            dir.register("alice@example.com", "short"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn lookup_unknown_is_none() {
        let dir = InMemoryDirectory::new();
        assert!(dir.lookup("nobody@example.com").is_none());
    }

    #[test]
    fn seed_admin_is_idempotent_and_grants_admin() {
        let dir = InMemoryDirectory::new();
        dir.seed_admin("root@example.com", "admin-secret").unwrap();
        dir.seed_admin("root@example.com", "different-secret").unwrap();

        let record = dir.lookup("root@example.com").unwrap();
        assert!(record.authorities.contains(&Authority::new("ROLE_ADMIN")));
        assert!(record.authorities.contains(&Authority::new("ROLE_USER")));
        // First seeding wins; the second call did not overwrite the secret.
        assert!(dir.verify_secret(&record, "admin-secret"));
    }

    #[test]
    fn list_is_ordered_by_identifier() {
        let dir = InMemoryDirectory::new();
        dir.register("carol@example.com", "a-long-secret").unwrap();
        dir.register("alice@example.com", "a-long-secret").unwrap();

        let identifiers: Vec<String> =
            dir.list().into_iter().map(|p| p.identifier).collect();
        assert_eq!(identifiers, vec!["alice@example.com", "carol@example.com"]);
    }
}
