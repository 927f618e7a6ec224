//! Token verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::codec::TokenCodec;
use crate::context::SecurityContext;
use crate::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies a raw authorization header value and produces the
/// request-scoped [`SecurityContext`].
///
/// Verification is fully local: it reads the current time and the signing
/// secret via the codec, and never contacts the directory or any external
/// store. This is the property that lets any number of instances verify
/// tokens without shared session state.
pub struct TokenVerifier {
    codec: Arc<dyn TokenCodec>,
}

impl TokenVerifier {
    pub fn new(codec: Arc<dyn TokenCodec>) -> Self {
        Self { codec }
    }

    /// Verify the raw `Authorization` header value.
    ///
    /// The authorities embedded in the token are propagated into the
    /// context as-is; verification never substitutes its own.
    pub fn verify(
        &self,
        header_value: &str,
        now: DateTime<Utc>,
    ) -> Result<SecurityContext, AuthError> {
        let token = extract_bearer(header_value)?;
        let claims = self.codec.decode(token, now)?;

        Ok(SecurityContext::new(claims.sub, claims.authorities))
    }
}

fn extract_bearer(value: &str) -> Result<&str, AuthError> {
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MissingToken)?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
