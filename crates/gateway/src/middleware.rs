use std::sync::Arc;

use axum::{extract::State, http::header::AUTHORIZATION, middleware::Next, response::Response};
use chrono::Utc;

use gatekit_auth::{IngressOutcome, IngressPipeline};

use crate::app::errors;

#[derive(Clone)]
pub struct IngressState {
    pub pipeline: Arc<IngressPipeline>,
}

/// Drive the ingress pipeline for every request.
///
/// Public paths pass straight through; protected paths get the verified
/// [`gatekit_auth::SecurityContext`] attached as a request extension, or a
/// 401 short-circuit carrying the rejection reason.
pub async fn ingress_middleware(
    State(state): State<IngressState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state
        .pipeline
        .handle(req.uri().path(), authorization, Utc::now())
    {
        IngressOutcome::Forwarded(context) => {
            if let Some(context) = context {
                req.extensions_mut().insert(context);
            }
            Ok(next.run(req).await)
        }
        IngressOutcome::Rejected(reason) => Err(errors::rejection_to_response(&reason)),
    }
}
