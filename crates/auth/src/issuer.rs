//! Token issuance.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::claims::Claims;
use crate::codec::TokenCodec;
use crate::directory::CredentialDirectory;
use crate::error::AuthError;

/// Authenticates a credential pair against the directory and mints a signed
/// token carrying the principal's identity and authorities.
pub struct TokenIssuer {
    directory: Arc<dyn CredentialDirectory>,
    codec: Arc<dyn TokenCodec>,
    validity: Duration,
}

impl TokenIssuer {
    pub fn new(
        directory: Arc<dyn CredentialDirectory>,
        codec: Arc<dyn TokenCodec>,
        validity: Duration,
    ) -> Self {
        Self {
            directory,
            codec,
            validity,
        }
    }

    /// Authenticate `identifier`/`secret` and return a signed token.
    ///
    /// An unknown identifier and a wrong secret both fail with
    /// [`AuthError::InvalidCredentials`]: the issuer must not reveal
    /// whether the identifier exists. Single attempt, no retries.
    pub fn issue(
        &self,
        identifier: &str,
        secret: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let record = self
            .directory
            .lookup(identifier)
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.directory.verify_secret(&record, secret) {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims {
            sub: record.identifier.clone(),
            authorities: record.authorities.clone(),
            issued_at: now,
            expires_at: now + self.validity,
        };

        self.codec.encode(&claims)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::codec::Hs256TokenCodec;
    use crate::directory::PrincipalRecord;
    use crate::Authority;

    /// Directory stub with a single principal whose secret is stored in
    /// the clear (hashing belongs to the real directory, not this crate).
    struct SingleUserDirectory {
        record: PrincipalRecord,
        secret: String,
    }

    impl CredentialDirectory for SingleUserDirectory {
        fn lookup(&self, identifier: &str) -> Option<PrincipalRecord> {
            (identifier == self.record.identifier).then(|| self.record.clone())
        }

        fn verify_secret(&self, _record: &PrincipalRecord, secret: &str) -> bool {
            secret == self.secret
        }
    }

    fn issuer() -> TokenIssuer {
        let directory = SingleUserDirectory {
            record: PrincipalRecord {
                identifier: "u@example.com".to_string(),
                secret_hash: "opaque".to_string(),
                authorities: BTreeSet::from([Authority::new("ROLE_USER")]),
            },
            secret: "hunter2-hunter2".to_string(),
        };

        TokenIssuer::new(
            Arc::new(directory),
            Arc::new(Hs256TokenCodec::new(b"test-secret")),
            Duration::seconds(3600),
        )
    }

    #[test]
    fn issues_token_with_identity_and_authorities() {
        let issuer = issuer();
        let now = Utc::now();

        let token = issuer.issue("u@example.com", "hunter2-hunter2", now).unwrap();

        let codec = Hs256TokenCodec::new(b"test-secret");
        let claims = codec.decode(&token, now).unwrap();
        assert_eq!(claims.sub, "u@example.com");
        assert!(claims.authorities.contains(&Authority::new("ROLE_USER")));
        assert_eq!(claims.issued_at, now);
        assert_eq!(claims.expires_at, now + Duration::seconds(3600));
    }

    #[test]
    fn unknown_identifier_and_wrong_secret_are_indistinguishable() {
        let issuer = issuer();
        let now = Utc::now();

        let unknown = issuer.issue("nobody@example.com", "hunter2-hunter2", now);
        let wrong_secret = issuer.issue("u@example.com", "wrong", now);

        assert_eq!(unknown, Err(AuthError::InvalidCredentials));
        assert_eq!(wrong_secret, Err(AuthError::InvalidCredentials));
        assert_eq!(unknown, wrong_secret);
    }
}
