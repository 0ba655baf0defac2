//! Cloudflare DNS records forwarder

mod http;
mod provider;
mod types;

use reqwest::Client;

pub(crate) use types::CloudflareDnsRecord;

/// Production API root.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Client for the DNS records endpoints of one zone at a time.
///
/// Holds no credentials: every call receives a [`ZoneCredentials`](crate::ZoneCredentials)
/// and performs exactly one request. Cloning is cheap, the inner
/// [`reqwest::Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl CloudflareClient {
    pub fn new() -> Self {
        Self::with_base_url(CF_API_BASE)
    }

    /// Point the client at another API root (a mock server in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CloudflareClient {
    fn default() -> Self {
        Self::new()
    }
}
