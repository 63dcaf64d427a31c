// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Talquin Core
//!
//! Core models and the error taxonomy for the Talquin Electric API client.
//!
//! This crate is transport-agnostic: it defines what the client returns and
//! how failures are categorized, while the actual HTTP exchange lives in
//! `talquin-client`.
//!
//! ## Key Types
//!
//! - [`UsageEntry`] - One daily electricity consumption reading
//! - [`AccessToken`] - Opaque bearer token, passed through from the provider
//! - [`ApiError`] - Closed error taxonomy (authentication / communication /
//!   generic), each carrying its originating failure as a source

pub mod error;
pub mod models;

// Re-export error types
pub use error::{ApiError, BoxedError};

// Re-export all model types
pub use models::{AccessToken, UsageEntry};
