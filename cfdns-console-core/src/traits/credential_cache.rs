//! 凭证缓存抽象 Trait

use async_trait::async_trait;
use cfdns_console_provider::ZoneCredentials;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// 凭证缓存 Trait
///
/// Remembers the last successfully connected credentials so the connect form
/// can be prefilled on the next start. Holds at most one entry.
///
/// 实现:
/// - [`JsonFileCredentialCache`](crate::storage::JsonFileCredentialCache): JSON file in the user config dir
/// - [`InMemoryCredentialCache`]: process memory only
#[async_trait]
pub trait CredentialCache: Send + Sync {
    /// 读取缓存的凭证
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - 凭证存在
    /// * `Ok(None)` - 凭证不存在
    async fn load(&self) -> CoreResult<Option<ZoneCredentials>>;

    /// 保存凭证（覆盖已有内容）
    async fn save(&self, credentials: &ZoneCredentials) -> CoreResult<()>;

    /// 清除凭证。不存在时不报错。
    async fn clear(&self) -> CoreResult<()>;
}

/// 内存凭证缓存
#[derive(Default)]
pub struct InMemoryCredentialCache {
    credentials: RwLock<Option<ZoneCredentials>>,
}

impl InMemoryCredentialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that starts out holding `credentials`.
    pub fn with_credentials(credentials: ZoneCredentials) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
        }
    }
}

#[async_trait]
impl CredentialCache for InMemoryCredentialCache {
    async fn load(&self) -> CoreResult<Option<ZoneCredentials>> {
        Ok(self.credentials.read().await.clone())
    }

    async fn save(&self, credentials: &ZoneCredentials) -> CoreResult<()> {
        *self.credentials.write().await = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.credentials.write().await = None;
        Ok(())
    }
}
