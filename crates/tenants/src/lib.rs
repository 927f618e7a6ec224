//! `gatekit-tenants` — tenant (business entity) registry.
//!
//! Tenants are the platform's customers; each subscribes to a set of
//! modules. This crate owns the tenant model and its uniqueness rules; it
//! knows nothing about HTTP or authentication.

pub mod service;
pub mod store;
pub mod tenant;

pub use service::TenantService;
pub use store::{InMemoryTenantStore, TenantRepository};
pub use tenant::{Tenant, TenantStatus};
