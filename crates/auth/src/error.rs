use thiserror::Error;

/// Rejection taxonomy for issuance and verification.
///
/// Every variant is terminal at this layer: the caller must obtain new
/// credentials or a fresh token, never retry. None of these are fatal to
/// the process; the transport layer maps them to responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identifier or wrong secret. Deliberately indistinguishable
    /// so the issuance boundary cannot be used to enumerate identifiers.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No bearer token present where one was required.
    #[error("missing bearer token")]
    MissingToken,

    /// The token string is structurally invalid or undecodable.
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the encoded claims.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token's validity window has passed.
    #[error("token has expired")]
    Expired,
}
