//! Talquin Electric API client.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, instrument, warn};

use talquin_core::{AccessToken, ApiError, UsageEntry};

use crate::compat::{CompatPolicy, EdgeCompatPolicy};
use crate::http::Transport;

/// Versioned API root.
const BASE_URL: &str = "https://api.talquinelectric.com/v1/";

/// Fixed client identification; the provider rejects requests without a
/// `User-Agent`.
const USER_AGENT: &str = "Home Assistant - Talquin Electric Integration";

/// Timestamp layout the usage endpoint expects for range bounds (UTC,
/// whole-second precision, no fractional seconds).
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Aggregation interval requested from the usage endpoint.
const USAGE_INTERVAL: &str = "DAILY";

/// Very simple API client for Talquin Electric energy data.
///
/// Credentials are captured at construction and never mutated. Both
/// operations re-authenticate on every call and are safe to invoke
/// concurrently: each call owns its own transport session end-to-end.
pub struct TalquinApiClient {
    username: String,
    password: String,
    base_url: String,
    transport: Transport,
}

impl TalquinApiClient {
    /// Creates a client for the production API with the default edge
    /// compatibility policy.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_compat_policy(username, password, Arc::new(EdgeCompatPolicy))
    }

    /// Creates a client with a custom compatibility policy.
    pub fn with_compat_policy(
        username: impl Into<String>,
        password: impl Into<String>,
        policy: Arc<dyn CompatPolicy>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: BASE_URL.to_string(),
            transport: Transport::new(policy),
        }
    }

    /// Points the client at a different API root.
    ///
    /// Intended for tests against a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Headers sent with every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Obtains an access token via the OAuth2 password grant.
    ///
    /// The token payload is provider-defined and returned as-is; nothing is
    /// cached, and no `Authorization` header is sent on this call.
    #[instrument(skip(self))]
    pub async fn fetch_access_token(&self) -> Result<AccessToken, ApiError> {
        debug!("Requesting access token");
        let payload = self
            .transport
            .request(
                Method::POST,
                &format!("{}oauth2/token", self.base_url),
                Self::default_headers(),
                Some(&[
                    ("grant_type", "password"),
                    ("username", self.username.as_str()),
                    ("password", self.password.as_str()),
                ]),
                None,
            )
            .await?;
        Ok(AccessToken::from(payload))
    }

    /// Fetches daily usage readings for an account over a date range.
    ///
    /// A fresh token is obtained first; a failure there aborts the call
    /// before the usage request is made. `start_date <= end_date` is not
    /// validated client-side and the range is unbounded — the upstream API
    /// rejects ranges it will not serve. Entries are returned in the order
    /// the provider sent them; a single malformed entry fails the whole
    /// call.
    #[instrument(skip(self))]
    pub async fn fetch_usage(
        &self,
        account_id: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<UsageEntry>, ApiError> {
        let token = self.fetch_access_token().await?;

        let mut headers = Self::default_headers();
        let bearer = format!("Bearer {token}");
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|e| {
                ApiError::generic(format!("Something really wrong happened! - {e}"), e)
            })?,
        );

        let payload = self
            .transport
            .request(
                Method::GET,
                &format!("{}accounts/{account_id}/usage", self.base_url),
                headers,
                None,
                Some(&[
                    ("start_date", start_date.format(DATE_FORMAT).to_string()),
                    ("end_date", end_date.format(DATE_FORMAT).to_string()),
                    ("interval", USAGE_INTERVAL.to_string()),
                ]),
            )
            .await?;

        let entries: Vec<UsageEntry> = serde_json::from_value(payload).map_err(|e| {
            warn!(error = %e, "Usage payload did not match the expected shape");
            ApiError::generic(format!("Something really wrong happened! - {e}"), e)
        })?;
        debug!(entries = entries.len(), "Fetched usage data");
        Ok(entries)
    }
}
