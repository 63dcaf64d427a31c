//! Error taxonomy for Talquin Electric API operations.

use thiserror::Error;

/// Boxed lower-level failure attached to a classified error.
///
/// Kept dynamic so this crate does not depend on any particular transport
/// stack; the client crate boxes whatever actually failed.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for Talquin Electric API operations.
///
/// Every failure surfaced by the client is one of these kinds. Classification
/// happens once, at the transport boundary; an error that is already an
/// [`ApiError`] is never re-wrapped.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider rejected the request with HTTP 401 or 403.
    ///
    /// The message distinguishes an ordinary credential rejection from a
    /// bot-mitigation challenge served by the provider's edge.
    #[error("{message}")]
    Authentication {
        /// Human-readable rejection reason.
        message: String,
    },

    /// The provider could not be reached, the request timed out, or the
    /// response carried an unexpected HTTP status.
    ///
    /// Hosts should treat this kind as transient.
    #[error("{message}")]
    Communication {
        /// Human-readable failure description.
        message: String,
        /// The transport failure that triggered this error.
        #[source]
        source: BoxedError,
    },

    /// Anything that does not fit the taxonomy above, such as a response
    /// body that is not valid JSON.
    #[error("{message}")]
    Generic {
        /// Human-readable failure description.
        message: String,
        /// The underlying failure.
        #[source]
        source: BoxedError,
    },
}

impl ApiError {
    /// Builds an [`ApiError::Authentication`].
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Builds an [`ApiError::Communication`] with its originating failure.
    pub fn communication(message: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::Communication {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Builds an [`ApiError::Generic`] with its originating failure.
    pub fn generic(message: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::Generic {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Returns true for credential or challenge rejections.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns true for transient transport-level failures.
    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }
}
