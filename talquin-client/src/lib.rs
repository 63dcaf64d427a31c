// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Talquin Client
//!
//! Authenticated HTTP client for the Talquin Electric member usage API.
//!
//! The client performs two operations, composed linearly:
//!
//! 1. [`TalquinApiClient::fetch_access_token`] - OAuth2 password-grant
//!    token acquisition
//! 2. [`TalquinApiClient::fetch_usage`] - daily usage retrieval for an
//!    account over a date range
//!
//! Every usage fetch re-authenticates; no token, retry, or session state is
//! kept between calls. Transport failures are normalized into the
//! [`ApiError`] taxonomy once, at the transport boundary.
//!
//! The provider sits behind a bot-mitigation edge that rejects default
//! client fingerprints; the protocol shims working around it live in
//! [`compat`] and can be swapped without touching the client.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use talquin_client::TalquinApiClient;
//!
//! # async fn example() -> Result<(), talquin_client::ApiError> {
//! let client = TalquinApiClient::new("member@example.com", "hunter2");
//! let usage = client
//!     .fetch_usage(
//!         "12345",
//!         Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2021, 1, 30, 0, 0, 0).unwrap(),
//!     )
//!     .await?;
//! for entry in &usage {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod compat;
mod http;

pub use client::TalquinApiClient;
pub use compat::{CompatPolicy, EdgeCompatPolicy};

// Re-export core types for convenience
pub use talquin_core::{AccessToken, ApiError, UsageEntry};
