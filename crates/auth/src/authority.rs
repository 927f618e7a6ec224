use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Authority granted to a principal (e.g. `ROLE_USER`, `ROLE_ADMIN`).
///
/// Authorities are intentionally opaque strings at this layer, compared by
/// exact match; mapping authorities to concrete capabilities is done by the
/// caller/policy layer. `Ord` is derived because claim sets carry
/// authorities as an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(Cow<'static, str>);

impl Authority {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Authority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
