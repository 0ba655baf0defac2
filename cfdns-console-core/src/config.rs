//! 控制台配置

use std::path::PathBuf;
use std::sync::Arc;

use cfdns_console_provider::{CF_API_BASE, CloudflareClient};
use serde::{Deserialize, Serialize};

use crate::services::{ConsoleController, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::storage::{JsonFileCredentialCache, default_cache_path};

/// Settings for building a [`ConsoleController`] against the Cloudflare API.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// API root, without trailing slash.
    pub api_base_url: String,
    /// Records requested per page when fetching the record set.
    pub page_size: u32,
    /// Upper bound on pages fetched per refresh.
    pub max_pages: u32,
    /// Credential cache file. `None` uses the user config directory.
    pub cache_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: CF_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            cache_path: None,
        }
    }
}

impl ConsoleConfig {
    pub fn build_client(&self) -> CloudflareClient {
        CloudflareClient::with_base_url(&self.api_base_url)
    }

    pub fn build_cache(&self) -> JsonFileCredentialCache {
        JsonFileCredentialCache::new(self.cache_path.clone().unwrap_or_else(default_cache_path))
    }

    /// Controller wired to the Cloudflare client and the JSON credential cache.
    pub fn build_controller(&self) -> ConsoleController<CloudflareClient> {
        ConsoleController::new(self.build_client(), Arc::new(self.build_cache()))
            .with_paging(self.page_size, self.max_pages)
    }
}
