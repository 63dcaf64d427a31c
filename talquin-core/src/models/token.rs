//! Access token handling.

use std::fmt;

use serde_json::Value;

/// Bearer token as returned by the provider's token endpoint.
///
/// The provider has not committed to a payload shape, so the response body is
/// kept verbatim instead of being parsed into a structured grant. The token
/// carries no expiry information and is fetched anew for every usage
/// retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken(Value);

impl AccessToken {
    /// Wraps a raw token payload.
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// The payload exactly as the provider returned it.
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for AccessToken {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for AccessToken {
    /// Renders the bare token for an `Authorization` header.
    ///
    /// String payloads drop their surrounding JSON quotes; any other payload
    /// renders as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(token) => f.write_str(token),
            other => write!(f, "{other}"),
        }
    }
}
