use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatekit_directory::Principal;
use gatekit_tenants::{Tenant, TenantStatus};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddModuleRequest {
    pub module: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub identifier: String,
    pub authorities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Principal> for UserResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            identifier: principal.identifier.clone(),
            authorities: principal
                .authorities
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
            created_at: principal.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TenantResponse {
    pub id: String,
    pub name: String,
    pub status: TenantStatus,
    pub subscribed_modules: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Tenant> for TenantResponse {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id().to_string(),
            name: tenant.name().to_string(),
            status: tenant.status(),
            subscribed_modules: tenant.subscribed_modules().iter().cloned().collect(),
            created_at: tenant.created_at(),
            updated_at: tenant.updated_at(),
        }
    }
}
