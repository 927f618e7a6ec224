//! `gatekit-auth` — pure authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! issuance, verification, and the path-based access policy are pure logic
//! over injected collaborators (a credential directory port and a signing
//! codec). Nothing here performs I/O on the verification path.

pub mod authority;
pub mod claims;
pub mod codec;
pub mod context;
pub mod directory;
pub mod error;
pub mod issuer;
pub mod pipeline;
pub mod policy;
pub mod verifier;

pub use authority::Authority;
pub use claims::Claims;
pub use codec::{Hs256TokenCodec, TokenCodec};
pub use context::SecurityContext;
pub use directory::{CredentialDirectory, PrincipalRecord};
pub use error::AuthError;
pub use issuer::TokenIssuer;
pub use pipeline::{IngressOutcome, IngressPipeline};
pub use policy::{Access, AccessRule, AuthorizationPolicy};
pub use verifier::TokenVerifier;
