// Veridian client SDK.
// Blocking client for the Veridian verification API: credential management,
// process-wide token caching, capability dispatch and typed responses.

pub mod client;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod token_cache;
mod update;

pub use client::Client;
pub use config::{ClientConfig, CLOUD_BASE_URL, LOCAL_BASE_URL};
pub use credentials::{CredentialKind, CredentialSet};
pub use token_cache::VerificationRecord;

// Re-export the core surface so most callers only depend on this crate.
pub use veridian_core::{models, Error, Visibility};
