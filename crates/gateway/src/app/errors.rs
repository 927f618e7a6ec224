use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gatekit_auth::AuthError;
use gatekit_core::DomainError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a verification rejection to its transport response.
///
/// Granular codes are acceptable on this path: the caller already
/// presented a token, so nothing about identifier existence leaks.
pub fn rejection_to_response(reason: &AuthError) -> axum::response::Response {
    let code = match reason {
        AuthError::MissingToken => "missing_token",
        AuthError::Malformed => "malformed_token",
        AuthError::InvalidSignature => "invalid_signature",
        AuthError::Expired => "token_expired",
        AuthError::InvalidCredentials => "invalid_credentials",
    };

    json_error(StatusCode::UNAUTHORIZED, code, reason.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Unauthorized => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
    }
}
