//! Tenant business rules over the persistence port.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use gatekit_core::{DomainError, DomainResult, TenantId};

use crate::store::TenantRepository;
use crate::tenant::Tenant;

/// Tenant registry operations: creation with name uniqueness, lookups,
/// idempotent deletion, and module subscription.
pub struct TenantService {
    repository: Arc<dyn TenantRepository>,
}

impl TenantService {
    pub fn new(repository: Arc<dyn TenantRepository>) -> Self {
        Self { repository }
    }

    /// Create a tenant. Names are unique across the registry.
    pub fn create(&self, name: &str, now: DateTime<Utc>) -> DomainResult<Tenant> {
        let tenant = Tenant::new(name, now)?;

        if self.repository.find_by_name(tenant.name()).is_some() {
            tracing::warn!(name = %tenant.name(), "rejected tenant with duplicate name");
            return Err(DomainError::conflict(format!(
                "a tenant named '{}' already exists",
                tenant.name()
            )));
        }

        self.repository.save(tenant.clone());
        tracing::info!(id = %tenant.id(), name = %tenant.name(), "tenant created");
        Ok(tenant)
    }

    pub fn get(&self, id: TenantId) -> DomainResult<Tenant> {
        self.repository.find_by_id(id).ok_or(DomainError::NotFound)
    }

    pub fn list(&self) -> Vec<Tenant> {
        self.repository.list()
    }

    /// Delete a tenant. Idempotent: deleting an unknown id logs a warning
    /// and succeeds.
    pub fn delete(&self, id: TenantId) {
        if self.repository.find_by_id(id).is_none() {
            tracing::warn!(id = %id, "deleting a tenant that does not exist");
        }

        self.repository.delete(id);
        tracing::info!(id = %id, "tenant deleted");
    }

    /// Subscribe a tenant to a module.
    ///
    /// Subscribing an already-subscribed module is not an error; the
    /// tenant is returned unchanged.
    pub fn add_module(&self, id: TenantId, module: &str, now: DateTime<Utc>) -> DomainResult<Tenant> {
        let mut tenant = self.get(id)?;

        if !tenant.add_module(module, now) {
            tracing::warn!(id = %id, module = %module, "module already subscribed, no change");
            return Ok(tenant);
        }

        self.repository.save(tenant.clone());
        tracing::info!(id = %id, module = %module, "module added to tenant");
        Ok(tenant)
    }
}
