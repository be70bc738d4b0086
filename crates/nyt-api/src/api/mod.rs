//! NYT developer API plumbing.
//!
//! This module holds the base client every sub-API is built on and the raw
//! response types it decodes.

pub mod client;
pub mod types;

pub use client::{check_error, http_client, ApiBase, Credential, QueryParams};
