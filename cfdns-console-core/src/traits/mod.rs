//! Storage abstraction traits

mod credential_cache;

pub use credential_cache::{CredentialCache, InMemoryCredentialCache};
