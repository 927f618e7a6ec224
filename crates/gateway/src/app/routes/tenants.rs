//! Tenant registry endpoints.
//!
//! Reads require any authenticated context; mutations require
//! `ROLE_ADMIN`.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use gatekit_auth::SecurityContext;
use gatekit_core::TenantId;

use crate::app::dto::{AddModuleRequest, CreateTenantRequest, TenantResponse};
use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_tenant).get(list_tenants))
        .route("/:id", get(get_tenant).delete(delete_tenant))
        .route("/:id/modules", post(add_module))
}

fn require_admin(context: &SecurityContext) -> Result<(), axum::response::Response> {
    if context.has_authority("ROLE_ADMIN") {
        Ok(())
    } else {
        Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "managing tenants requires ROLE_ADMIN",
        ))
    }
}

fn parse_tenant_id(raw: &str) -> Result<TenantId, axum::response::Response> {
    TenantId::from_str(raw).map_err(errors::domain_error_to_response)
}

/// POST /api/v1/tenants - Create a tenant.
pub async fn create_tenant(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(context): Extension<SecurityContext>,
    Json(body): Json<CreateTenantRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&context) {
        return resp;
    }

    match services.tenants.create(&body.name, Utc::now()) {
        Ok(tenant) => (StatusCode::CREATED, Json(TenantResponse::from(&tenant))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /api/v1/tenants - List all tenants.
pub async fn list_tenants(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let tenants: Vec<TenantResponse> = services
        .tenants
        .list()
        .iter()
        .map(TenantResponse::from)
        .collect();

    (StatusCode::OK, Json(tenants)).into_response()
}

/// GET /api/v1/tenants/:id - Fetch one tenant.
pub async fn get_tenant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_tenant_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.tenants.get(id) {
        Ok(tenant) => (StatusCode::OK, Json(TenantResponse::from(&tenant))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// DELETE /api/v1/tenants/:id - Delete a tenant (idempotent).
pub async fn delete_tenant(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(context): Extension<SecurityContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&context) {
        return resp;
    }

    let id = match parse_tenant_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    services.tenants.delete(id);
    StatusCode::NO_CONTENT.into_response()
}

/// POST /api/v1/tenants/:id/modules - Subscribe the tenant to a module.
pub async fn add_module(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(context): Extension<SecurityContext>,
    Path(id): Path<String>,
    Json(body): Json<AddModuleRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&context) {
        return resp;
    }

    let id = match parse_tenant_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if body.module.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "module name cannot be empty",
        );
    }

    match services.tenants.add_module(id, body.module.trim(), Utc::now()) {
        Ok(tenant) => (StatusCode::OK, Json(TenantResponse::from(&tenant))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
