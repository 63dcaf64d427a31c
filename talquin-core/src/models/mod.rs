//! Domain models for the Talquin Electric API.

mod token;
mod usage;

pub use token::AccessToken;
pub use usage::UsageEntry;
