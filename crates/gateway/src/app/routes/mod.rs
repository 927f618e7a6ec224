use axum::{Router, routing::get};

pub mod auth;
pub mod system;
pub mod tenants;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/whoami", get(system::whoami))
        .nest("/auth", auth::router())
        .nest("/api/v1/tenants", tenants::router())
}
