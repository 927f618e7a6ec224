//! Path-based authorization policy.
//!
//! A static, ordered rule set classifying request paths as public or
//! authenticated. Built once at startup and read-only thereafter.

use serde::{Deserialize, Serialize};

/// Access requirement for a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Bypasses token verification entirely.
    Public,
    /// Requires a valid security context.
    Authenticated,
}

/// A single (pattern, access requirement) pair.
///
/// Patterns are exact paths, or a prefix followed by `/**` which matches
/// the prefix itself and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pattern: String,
    access: Access,
}

impl AccessRule {
    pub fn public(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            access: Access::Public,
        }
    }

    pub fn authenticated(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            access: Access::Authenticated,
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self.pattern.strip_suffix("/**") {
            Some(prefix) => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            None => path == self.pattern,
        }
    }
}

/// Ordered first-match policy with a fail-closed default.
pub struct AuthorizationPolicy {
    rules: Vec<AccessRule>,
}

impl AuthorizationPolicy {
    /// Rule order is preserved exactly as configured; evaluation is
    /// first-match, not best-match.
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// Classify a request path. No matching rule means `Authenticated`.
    pub fn classify(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| rule.access)
            .unwrap_or(Access::Authenticated)
    }
}
