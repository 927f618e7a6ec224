//! Per-request ingress state machine.
//!
//! `Received → Classified → (Forwarded | Rejected)`. Classification
//! consults the policy; protected requests go through token verification.
//! Both outcomes are terminal for the request; there is no retry or
//! recovery at this layer. The HTTP middleware only drives this machine.
//! All the decisions live here, where they are testable without a server.

use chrono::{DateTime, Utc};

use crate::context::SecurityContext;
use crate::error::AuthError;
use crate::policy::{Access, AuthorizationPolicy};
use crate::verifier::TokenVerifier;

/// Terminal outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngressOutcome {
    /// Forward the request. Public paths carry no context; protected paths
    /// carry the verified one.
    Forwarded(Option<SecurityContext>),

    /// Short-circuit with the verifier's (or extractor's) rejection.
    Rejected(AuthError),
}

/// The ingress decision pipeline: policy classification plus verification.
pub struct IngressPipeline {
    policy: AuthorizationPolicy,
    verifier: TokenVerifier,
}

impl IngressPipeline {
    pub fn new(policy: AuthorizationPolicy, verifier: TokenVerifier) -> Self {
        Self { policy, verifier }
    }

    /// Decide the fate of a request from its path and authorization header.
    ///
    /// Public paths are forwarded without any verification; a present
    /// (even invalid) header is ignored. Protected paths require the
    /// header, and its absence rejects with [`AuthError::MissingToken`].
    pub fn handle(
        &self,
        path: &str,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> IngressOutcome {
        match self.policy.classify(path) {
            Access::Public => IngressOutcome::Forwarded(None),
            Access::Authenticated => match authorization {
                None => IngressOutcome::Rejected(AuthError::MissingToken),
                Some(header) => match self.verifier.verify(header, now) {
                    Ok(ctx) => IngressOutcome::Forwarded(Some(ctx)),
                    Err(e) => IngressOutcome::Rejected(e),
                },
            },
        }
    }
}
