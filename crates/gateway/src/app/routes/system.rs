use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use gatekit_auth::SecurityContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(context): Extension<SecurityContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "subject": context.subject(),
        "authorities": context
            .authorities()
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>(),
    }))
}
