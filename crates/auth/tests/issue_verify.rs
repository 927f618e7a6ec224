//! End-to-end issuance/verification flow with a controlled clock.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use gatekit_auth::{
    Authority, AuthError, CredentialDirectory, Hs256TokenCodec, IngressOutcome, IngressPipeline,
    PrincipalRecord, TokenIssuer, TokenVerifier,
    AccessRule, AuthorizationPolicy,
};

const SECRET: &[u8] = b"end-to-end-secret";

struct StubDirectory {
    record: PrincipalRecord,
    secret: String,
}

impl CredentialDirectory for StubDirectory {
    fn lookup(&self, identifier: &str) -> Option<PrincipalRecord> {
        (identifier == self.record.identifier).then(|| self.record.clone())
    }

    fn verify_secret(&self, _record: &PrincipalRecord, secret: &str) -> bool {
        secret == self.secret
    }
}

fn issuer() -> TokenIssuer {
    let directory = StubDirectory {
        record: PrincipalRecord {
            identifier: "u@example.com".to_string(),
            secret_hash: "opaque".to_string(),
            authorities: BTreeSet::from([Authority::new("ROLE_USER")]),
        },
        secret: "a-long-secret".to_string(),
    };

    TokenIssuer::new(
        Arc::new(directory),
        Arc::new(Hs256TokenCodec::new(SECRET)),
        Duration::seconds(3600),
    )
}

fn verifier() -> TokenVerifier {
    TokenVerifier::new(Arc::new(Hs256TokenCodec::new(SECRET)))
}

fn issue_at(now: DateTime<Utc>) -> String {
    issuer()
        .issue("u@example.com", "a-long-secret", now)
        .expect("issuance with valid credentials must succeed")
}

#[test]
fn issued_token_verifies_immediately() {
    let now = Utc::now();
    let token = issue_at(now);

    let ctx = verifier()
        .verify(&format!("Bearer {token}"), now)
        .unwrap();

    assert_eq!(ctx.subject(), "u@example.com");
    assert_eq!(
        ctx.authorities(),
        &BTreeSet::from([Authority::new("ROLE_USER")])
    );
}

#[test]
fn issued_token_expires_after_validity_window() {
    let now = Utc::now();
    let token = issue_at(now);
    let header = format!("Bearer {token}");

    // Still valid one second before the window closes.
    let almost = now + Duration::seconds(3599);
    assert!(verifier().verify(&header, almost).is_ok());

    // Expired exactly at the boundary and beyond.
    assert_eq!(
        verifier().verify(&header, now + Duration::seconds(3600)),
        Err(AuthError::Expired)
    );
    assert_eq!(
        verifier().verify(&header, now + Duration::seconds(7200)),
        Err(AuthError::Expired)
    );
}

#[test]
fn corrupted_token_is_rejected() {
    let now = Utc::now();
    let token = issue_at(now);

    // Corrupt one character; depending on where it lands this reads as a
    // signature mismatch or an undecodable structure.
    let corrupted: String = {
        let mut bytes = token.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'x' { b'y' } else { b'x' };
        String::from_utf8(bytes).unwrap()
    };

    let result = verifier().verify(&format!("Bearer {corrupted}"), now);
    assert!(matches!(
        result,
        Err(AuthError::InvalidSignature) | Err(AuthError::Malformed)
    ));
}

#[test]
fn protected_request_without_header_is_missing_token() {
    let pipeline = IngressPipeline::new(
        AuthorizationPolicy::new(vec![AccessRule::public("/auth/login")]),
        verifier(),
    );

    let outcome = pipeline.handle("/api/v1/tenants", None, Utc::now());
    assert_eq!(outcome, IngressOutcome::Rejected(AuthError::MissingToken));
}
