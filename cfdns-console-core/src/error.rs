//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use cfdns_console_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Record form rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Credential cache I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The session holds no credentials
    #[error("API Token and Zone ID are missing.")]
    NotConnected,
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing credentials, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotConnected => true,
            Self::Provider(e) => e.is_expected(),
            Self::Storage(_) | Self::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
