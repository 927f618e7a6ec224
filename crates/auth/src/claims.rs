use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Authority;

/// Token claim set (transport-agnostic).
///
/// Immutable once constructed; a claim set exists only inside a token's
/// lifetime. The valid interval is `[issued_at, expires_at)`: a token
/// whose `expires_at` equals the current instant is already expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / principal identifier.
    pub sub: String,

    /// Authorities granted to the subject at issuance time.
    pub authorities: BTreeSet<Authority>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Whether the claim set is expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn claims(expires_at: DateTime<Utc>) -> Claims {
        Claims {
            sub: "u@example.com".to_string(),
            authorities: BTreeSet::from([Authority::new("ROLE_USER")]),
            issued_at: expires_at - Duration::hours(1),
            expires_at,
        }
    }

    #[test]
    fn not_expired_before_expiry() {
        let now = Utc::now();
        assert!(!claims(now + Duration::seconds(1)).is_expired(now));
    }

    #[test]
    fn expired_at_exact_expiry_instant() {
        let now = Utc::now();
        assert!(claims(now).is_expired(now));
    }

    #[test]
    fn expired_after_expiry() {
        let now = Utc::now();
        assert!(claims(now - Duration::seconds(1)).is_expired(now));
    }
}
