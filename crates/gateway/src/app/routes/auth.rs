//! Credential endpoints: registration, login, principal listing.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use gatekit_auth::SecurityContext;

use crate::app::dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
}

/// POST /auth/register - Create a new principal with the default authority.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RegisterRequest>,
) -> axum::response::Response {
    match services.directory.register(&body.email, &body.password) {
        Ok(principal) => (
            StatusCode::CREATED,
            Json(UserResponse::from(&principal)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /auth/login - Authenticate and mint a token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    match services.issuer.issue(&body.email, &body.password, Utc::now()) {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),
        Err(_) => {
            // One undifferentiated response for every issuance failure, and
            // the reason stays out of the logs: a failed login must not
            // reveal whether the identifier exists.
            tracing::info!("login attempt rejected");
            errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid email or password",
            )
        }
    }
}

/// GET /auth/users - List principals (admin only).
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(context): Extension<SecurityContext>,
) -> axum::response::Response {
    if !context.has_authority("ROLE_ADMIN") {
        return errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "listing principals requires ROLE_ADMIN",
        );
    }

    let users: Vec<UserResponse> = services
        .directory
        .list()
        .iter()
        .map(UserResponse::from)
        .collect();

    (StatusCode::OK, Json(users)).into_response()
}
