//! DNS provider implementations

pub(crate) mod cloudflare;

pub use cloudflare::{CF_API_BASE, CloudflareClient};
