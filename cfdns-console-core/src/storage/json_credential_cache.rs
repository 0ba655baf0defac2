//! 凭证缓存
//!
//! 使用 JSON 文件存储上次成功连接的凭证
//! 实现 `CredentialCache` trait

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cfdns_console_provider::ZoneCredentials;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::CoreResult;
use crate::traits::CredentialCache;

const APP_DIR: &str = "cfdns-console";
const CACHE_FILE: &str = "session.json";

/// 获取默认缓存文件路径
pub fn default_cache_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CACHE_FILE)
}

/// 基于 JSON 文件的凭证缓存
///
/// On Unix the file is created with mode `0600`.
#[derive(Debug, Clone)]
pub struct JsonFileCredentialCache {
    path: PathBuf,
}

impl JsonFileCredentialCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 确保父目录存在
    async fn ensure_parent_dir(&self) -> CoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    async fn write_private(&self, content: &[u8]) -> CoreResult<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;
        file.write_all(content).await?;
        file.flush().await?;

        // 已存在的文件不受 mode() 影响
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        Ok(())
    }
}

impl Default for JsonFileCredentialCache {
    fn default() -> Self {
        Self::new(default_cache_path())
    }
}

#[async_trait]
impl CredentialCache for JsonFileCredentialCache {
    async fn load(&self) -> CoreResult<Option<ZoneCredentials>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let credentials: ZoneCredentials = serde_json::from_str(&content)?;
        Ok(Some(credentials))
    }

    async fn save(&self, credentials: &ZoneCredentials) -> CoreResult<()> {
        self.ensure_parent_dir().await?;
        let content = serde_json::to_vec_pretty(credentials)?;
        self.write_private(&content).await?;
        log::debug!("Credentials cached at {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
