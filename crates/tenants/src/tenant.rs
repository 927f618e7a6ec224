use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatekit_core::{DomainError, DomainResult, TenantId};

/// Tenant lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Active,
    Inactive,
    PendingPayment,
    Suspended,
}

/// A tenant (customer) of the platform.
///
/// # Invariants
/// - The name is non-empty and unique across the registry (enforced by
///   [`crate::TenantService`]).
/// - New tenants always start `Active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    id: TenantId,
    name: String,
    status: TenantStatus,
    subscribed_modules: BTreeSet<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Create a new, active tenant.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("tenant name cannot be empty"));
        }

        Ok(Self {
            id: TenantId::new(),
            name,
            status: TenantStatus::Active,
            subscribed_modules: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> TenantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TenantStatus {
        self.status
    }

    pub fn subscribed_modules(&self) -> &BTreeSet<String> {
        &self.subscribed_modules
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Subscribe the tenant to a module.
    ///
    /// Returns `false` without touching `updated_at` when the module is
    /// already subscribed.
    pub fn add_module(&mut self, module: impl Into<String>, now: DateTime<Utc>) -> bool {
        let added = self.subscribed_modules.insert(module.into());
        if added {
            self.updated_at = now;
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tenant_is_active_with_no_modules() {
        let now = Utc::now();
        let tenant = Tenant::new("Acme Garage", now).unwrap();

        assert_eq!(tenant.name(), "Acme Garage");
        assert_eq!(tenant.status(), TenantStatus::Active);
        assert!(tenant.subscribed_modules().is_empty());
        assert_eq!(tenant.created_at(), now);
        assert_eq!(tenant.updated_at(), now);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(Tenant::new("", Utc::now()).is_err());
        assert!(Tenant::new("   ", Utc::now()).is_err());
    }

    #[test]
    fn add_module_is_idempotent() {
        let created = Utc::now();
        let mut tenant = Tenant::new("Acme", created).unwrap();

        let later = created + chrono::Duration::seconds(5);
        assert!(tenant.add_module("workshop", later));
        assert_eq!(tenant.updated_at(), later);

        let even_later = later + chrono::Duration::seconds(5);
        assert!(!tenant.add_module("workshop", even_later));
        assert_eq!(tenant.updated_at(), later);
    }
}
