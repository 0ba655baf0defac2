//! File-backed storage implementations

mod json_credential_cache;

pub use json_credential_cache::{JsonFileCredentialCache, default_cache_path};
