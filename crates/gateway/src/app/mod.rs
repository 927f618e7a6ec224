//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: collaborator wiring (directory, issuer, tenant registry)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;

use gatekit_auth::{
    AuthorizationPolicy, Hs256TokenCodec, IngressPipeline, TokenCodec, TokenVerifier,
};

use crate::config::GatewayConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: GatewayConfig) -> Router {
    let codec: Arc<dyn TokenCodec> =
        Arc::new(Hs256TokenCodec::new(config.signing_secret.as_bytes()));

    let services = Arc::new(services::build_services(&config, codec.clone()));

    let pipeline = Arc::new(IngressPipeline::new(
        AuthorizationPolicy::new(config.rules.clone()),
        TokenVerifier::new(codec),
    ));
    let ingress = middleware::IngressState { pipeline };

    // One middleware for the whole tree; the policy decides which paths
    // require verification.
    routes::router()
        .layer(axum::Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            ingress,
            middleware::ingress_middleware,
        ))
}
