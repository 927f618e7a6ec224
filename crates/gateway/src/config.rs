//! Gateway configuration.
//!
//! The core consumes configuration, it does not own it: the signing
//! secret, token validity, and the ordered rule list are loaded here and
//! injected at construction time.

use std::env;

use chrono::Duration;

use gatekit_auth::AccessRule;

/// Process configuration, loaded once at startup.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Listener address.
    pub bind_addr: String,

    /// Process-wide token signing secret.
    pub signing_secret: String,

    /// Validity duration applied to every issued token.
    pub token_validity: Duration,

    /// Identifier of the seeded admin principal.
    pub admin_identifier: String,

    /// Secret of the seeded admin principal.
    pub admin_secret: String,

    /// Ordered authorization rules; order is preserved exactly.
    pub rules: Vec<AccessRule>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let signing_secret = env::var("GATEKIT_SIGNING_SECRET").unwrap_or_else(|_| {
            tracing::warn!("GATEKIT_SIGNING_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let token_validity_secs: i64 = env::var("GATEKIT_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let admin_secret = env::var("GATEKIT_ADMIN_SECRET").unwrap_or_else(|_| {
            tracing::warn!("GATEKIT_ADMIN_SECRET not set; using insecure dev default");
            "admin-changeme".to_string()
        });

        Self {
            bind_addr: env::var("GATEKIT_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            signing_secret,
            token_validity: Duration::seconds(token_validity_secs),
            admin_identifier: env::var("GATEKIT_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@gatekit.local".to_string()),
            admin_secret,
            rules: Self::default_rules(),
        }
    }

    /// The default rule list: the credential endpoints and the health
    /// probe are public; everything else falls through to the
    /// fail-closed default.
    pub fn default_rules() -> Vec<AccessRule> {
        vec![
            AccessRule::public("/health"),
            AccessRule::public("/auth/login"),
            AccessRule::public("/auth/register"),
        ]
    }
}
