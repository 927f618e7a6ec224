//! Tenant persistence port and in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use gatekit_core::TenantId;

use crate::tenant::Tenant;

/// Persistence port for tenants. The service layer owns all business
/// rules; implementations only store and retrieve.
pub trait TenantRepository: Send + Sync {
    fn save(&self, tenant: Tenant);

    fn find_by_id(&self, id: TenantId) -> Option<Tenant>;

    fn find_by_name(&self, name: &str) -> Option<Tenant>;

    fn list(&self) -> Vec<Tenant>;

    fn delete(&self, id: TenantId);
}

/// Process-local tenant store.
#[derive(Default)]
pub struct InMemoryTenantStore {
    tenants: RwLock<HashMap<TenantId, Tenant>>,
}

impl InMemoryTenantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TenantRepository for InMemoryTenantStore {
    fn save(&self, tenant: Tenant) {
        self.tenants.write().unwrap().insert(tenant.id(), tenant);
    }

    fn find_by_id(&self, id: TenantId) -> Option<Tenant> {
        self.tenants.read().unwrap().get(&id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Tenant> {
        self.tenants
            .read()
            .unwrap()
            .values()
            .find(|t| t.name() == name)
            .cloned()
    }

    fn list(&self) -> Vec<Tenant> {
        let mut all: Vec<Tenant> = self.tenants.read().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    fn delete(&self, id: TenantId) {
        self.tenants.write().unwrap().remove(&id);
    }
}
