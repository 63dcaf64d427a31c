//! Transport wrapper around a single HTTP exchange.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use talquin_core::ApiError;

use crate::compat::CompatPolicy;

/// Hard bound on one request lifecycle: connect, send, and receive.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Low-level failure raised inside the transport wrapper before
/// classification into the public taxonomy.
#[derive(Debug, Error)]
pub(crate) enum Failure {
    /// Already carries a classification; passes through unchanged.
    #[error(transparent)]
    Classified(#[from] ApiError),

    /// Anything reqwest reported: timeouts, connection failures, and
    /// non-2xx statuses surfaced via `error_for_status_ref`.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Maps a low-level failure onto the public error taxonomy.
///
/// Classification happens exactly once: a failure that already is an
/// [`ApiError`] is returned unchanged.
pub(crate) fn classify(failure: Failure) -> ApiError {
    match failure {
        Failure::Classified(error) => error,
        Failure::Http(error) if error.is_timeout() => {
            ApiError::communication(format!("Timeout error fetching information - {error}"), error)
        }
        Failure::Http(error) => {
            ApiError::communication(format!("Error fetching information - {error}"), error)
        }
        Failure::Json(error) => {
            ApiError::generic(format!("Something really wrong happened! - {error}"), error)
        }
    }
}

/// Issues one HTTP request at a time, with a bounded lifetime and the
/// provider compatibility shims applied.
pub(crate) struct Transport {
    compat: Arc<dyn CompatPolicy>,
}

impl Transport {
    pub(crate) fn new(compat: Arc<dyn CompatPolicy>) -> Self {
        Self { compat }
    }

    /// Performs a single request/response exchange and decodes the JSON body.
    ///
    /// Every failure leaves through [`classify`]; raw transport errors never
    /// cross this boundary.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        form: Option<&[(&str, &str)]>,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, ApiError> {
        debug!(%method, url, "Sending API request");
        self.execute(method, url, headers, form, query)
            .await
            .map_err(classify)
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        form: Option<&[(&str, &str)]>,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, Failure> {
        // Fresh session per call; nothing is pooled across calls.
        let client = self
            .compat
            .configure(Client::builder().timeout(REQUEST_TIMEOUT))
            .build()?;

        let mut request = client.request(method, url).headers(headers);
        if let Some(form) = form {
            request = request.form(form);
        }
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        debug!(status = %response.status(), "Response received");
        self.verify(&response)?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Verifies that the response is valid, before its body is consumed.
    ///
    /// The challenge marker is only consulted for 401/403 responses.
    fn verify(&self, response: &Response) -> Result<(), Failure> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = if self.compat.is_challenge(response) {
                warn!("Bot-mitigation challenge detected");
                "Bot-mitigation challenge detected"
            } else {
                "Invalid credentials"
            };
            return Err(ApiError::authentication(message).into());
        }
        response.error_for_status_ref()?;
        Ok(())
    }
}
