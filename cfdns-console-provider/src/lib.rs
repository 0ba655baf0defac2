//! # cfdns-console-provider
//!
//! A typed forwarder for the Cloudflare DNS records API of a single zone.
//!
//! Every operation takes the caller's [`ZoneCredentials`], validates them
//! before touching the network, performs exactly one HTTPS request and turns
//! the Cloudflare response envelope into either a typed value or a
//! [`ProviderError`]. Nothing is retried or cached.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfdns_console_provider::{CloudflareClient, DnsRecordApi, RecordForm, RecordType, ZoneCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudflareClient::new();
//!     let creds = ZoneCredentials::new("your-token", "your-zone-id");
//!
//!     for record in client.list_records(&creds).await? {
//!         println!("{} {} -> {}", record.record_type, record.name, record.content);
//!     }
//!
//!     let form = RecordForm {
//!         record_type: RecordType::Mx,
//!         name: "example.com".to_string(),
//!         content: "mail.example.com".to_string(),
//!         priority: Some(10),
//!         ..RecordForm::default()
//!     };
//!     let created = client.create_record(&creds, &form).await?;
//!     client.delete_record(&creds, &created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidArgument`] — a required identifier is empty; no request was sent
//! - [`ProviderError::Upstream`] — Cloudflare reported failure, or the round trip failed
//! - [`ProviderError::Unknown`] — anything else
//!
//! [`ProviderError::category`] classifies upstream failures by Cloudflare error code.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{
    ApiErrorItem, NO_ERROR_DETAILS, ProviderError, Result, UNKNOWN_FAILURE_MESSAGE,
    UPSTREAM_FAILURE_PREFIX, UpstreamCategory,
};

// Re-export core trait
pub use traits::DnsRecordApi;

// Re-export types
pub use types::{
    AUTO_TTL, DEFAULT_FORM_TTL, DEFAULT_MX_PRIORITY, DeletedRecord, DnsRecord, MAX_PAGE_SIZE,
    MAX_TTL, MIN_PAGE_SIZE, MIN_TTL, PaginatedResponse, PaginationParams, RecordExtra,
    RecordForm, RecordType, ZoneCredentials, format_ttl, is_valid_ttl,
};

// Re-export utils module
pub use utils::datetime;

pub use providers::{CF_API_BASE, CloudflareClient};
