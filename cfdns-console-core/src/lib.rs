//! cfdns console core library
//!
//! Console controller for one Cloudflare DNS zone, including:
//! - Session state (credentials, fetched records, last error)
//! - Connect / refresh / create / update / delete / logout flows
//! - Record search and column sort
//! - Credential cache for prefilling the connect form
//!
//! This library is UI-independent: the embedding front end owns the
//! [`Session`] and renders the [`Notice`]s each operation returns. Network
//! access goes through the [`DnsRecordApi`] trait from `cfdns-console-provider`.

pub mod config;
pub mod error;
pub mod services;
pub mod storage;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cfdns_console_provider::DnsRecordApi;
pub use config::ConsoleConfig;
pub use error::{CoreError, CoreResult};
pub use services::{ConsoleController, validate_record_form};
pub use storage::JsonFileCredentialCache;
pub use traits::{CredentialCache, InMemoryCredentialCache};
pub use types::{
    ConnectForm, Notice, NoticeLevel, RecordView, Session, SortConfig, SortDirection, SortKey,
};
