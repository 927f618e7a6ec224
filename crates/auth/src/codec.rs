//! Signed token codec.
//!
//! Encodes a claim set into a self-contained signed string and decodes it
//! back, verifying the signature and the validity window. Pure function of
//! the input and the signing secret injected at construction; no global
//! state, no I/O.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};

use crate::claims::Claims;
use crate::error::AuthError;

/// Encode/decode boundary between claim sets and wire-format tokens.
///
/// `decode` takes the caller's single `now` read so the expiry comparison
/// happens exactly once per verification.
pub trait TokenCodec: Send + Sync {
    fn encode(&self, claims: &Claims) -> Result<String, AuthError>;

    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError>;
}

/// HMAC-SHA256 codec over the process-wide signing secret.
pub struct Hs256TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Claims carry RFC3339 timestamps rather than a numeric `exp`;
        // expiry is enforced in `decode` with zero leeway and a closed
        // bound at the exact expiry instant.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        // Serialization of a well-formed claim set cannot fail.
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| AuthError::Malformed)
    }

    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        // Signature comparison inside the library is constant-time.
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })?;

        let claims = data.claims;
        if claims.is_expired(now) {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}
