use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    DeletedRecord, DnsRecord, PaginatedResponse, PaginationParams, RecordForm, ZoneCredentials,
};

/// DNS 记录操作 Trait
///
/// One method per record lifecycle action. Every method validates its
/// identifiers before touching the network, performs exactly one request,
/// and never retries or caches.
#[async_trait]
pub trait DnsRecordApi: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 DNS 记录列表（单次请求，使用服务端默认分页）
    async fn list_records(&self, creds: &ZoneCredentials) -> Result<Vec<DnsRecord>>;

    /// 获取指定页的 DNS 记录
    async fn list_records_page(
        &self,
        creds: &ZoneCredentials,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<DnsRecord>>;

    /// 创建 DNS 记录
    async fn create_record(&self, creds: &ZoneCredentials, form: &RecordForm)
    -> Result<DnsRecord>;

    /// 更新 DNS 记录
    async fn update_record(
        &self,
        creds: &ZoneCredentials,
        record_id: &str,
        form: &RecordForm,
    ) -> Result<DnsRecord>;

    /// 删除 DNS 记录
    async fn delete_record(&self, creds: &ZoneCredentials, record_id: &str)
    -> Result<DeletedRecord>;
}

/// Shared precondition check for operations that address one record.
pub(crate) fn require_record_id(creds: &ZoneCredentials, record_id: &str) -> Result<()> {
    if creds.api_token.trim().is_empty()
        || creds.zone_id.trim().is_empty()
        || record_id.trim().is_empty()
    {
        return Err(ProviderError::invalid_argument(
            "API Token, Zone ID, and Record ID are required.",
        ));
    }
    Ok(())
}
