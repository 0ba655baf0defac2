//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;

use async_trait::async_trait;
use cfdns_console_provider::{
    ApiErrorItem, DeletedRecord, DnsRecord, DnsRecordApi, PaginatedResponse, PaginationParams,
    ProviderError, RecordExtra, RecordForm, RecordType, Result, ZoneCredentials,
};
use tokio::sync::RwLock;

/// 构造一条最小记录
pub fn record(id: &str, record_type: RecordType, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        zone_id: Some("zone-1".to_string()),
        zone_name: Some("example.com".to_string()),
        name: name.to_string(),
        proxiable: record_type.is_proxiable(),
        record_type,
        content: content.to_string(),
        ttl: 1,
        proxied: false,
        locked: false,
        extra: RecordExtra::None,
        comment: None,
        tags: Vec::new(),
        created_on: None,
        modified_on: None,
        other: serde_json::Map::new(),
    }
}

/// Provider-reported failure with a single error entry.
pub fn upstream_error(code: i64, message: &str) -> ProviderError {
    let errors = vec![ApiErrorItem {
        code,
        message: message.to_string(),
    }];
    ProviderError::Upstream {
        detail: errors[0].to_string(),
        errors,
    }
}

/// Round-trip failure without an error envelope.
pub fn transport_error(detail: &str) -> ProviderError {
    ProviderError::Upstream {
        detail: detail.to_string(),
        errors: Vec::new(),
    }
}

// ===== MockDnsRecordApi =====

/// One recorded forwarder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    ListPage(u32),
    /// 记录名
    Create(String),
    /// 记录 ID
    Update(String),
    /// 记录 ID
    Delete(String),
}

/// In-memory zone that behaves like the forwarder: identifiers are checked
/// before a call is recorded, and each call may be scripted to fail.
pub struct MockDnsRecordApi {
    records: RwLock<Vec<DnsRecord>>,
    calls: RwLock<Vec<Call>>,
    /// 每次调用依次弹出；`Some` 表示该次调用失败
    outcomes: RwLock<VecDeque<Option<ProviderError>>>,
    next_id: RwLock<u32>,
}

impl MockDnsRecordApi {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<DnsRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            calls: RwLock::new(Vec::new()),
            outcomes: RwLock::new(VecDeque::new()),
            next_id: RwLock::new(1),
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn push_record(&self, record: DnsRecord) {
        self.records.write().await.push(record);
    }

    /// 下一次调用失败
    pub async fn fail_next(&self, err: ProviderError) {
        self.outcomes.write().await.push_back(Some(err));
    }

    /// 下一次调用成功，再下一次失败
    pub async fn fail_after_next(&self, err: ProviderError) {
        let mut outcomes = self.outcomes.write().await;
        outcomes.push_back(None);
        outcomes.push_back(Some(err));
    }

    async fn record_call(&self, call: Call) -> Result<()> {
        self.calls.write().await.push(call);
        match self.outcomes.write().await.pop_front() {
            Some(Some(err)) => Err(err),
            _ => Ok(()),
        }
    }

    fn require_record_id(creds: &ZoneCredentials, record_id: &str) -> Result<()> {
        creds.validate().map_err(|_| record_id_required())?;
        if record_id.trim().is_empty() {
            return Err(record_id_required());
        }
        Ok(())
    }

    fn apply_form(record: &mut DnsRecord, form: &RecordForm) {
        record.record_type = form.record_type.clone();
        record.name = form.name.clone();
        record.content = form.content.clone();
        record.ttl = form.ttl;
        record.proxied = form.proxied.unwrap_or(false);
        record.proxiable = form.record_type.is_proxiable();
        record.extra = match (&form.record_type, form.priority) {
            (RecordType::Mx, Some(priority)) => RecordExtra::Mx { priority },
            _ => RecordExtra::None,
        };
    }
}

fn record_id_required() -> ProviderError {
    ProviderError::InvalidArgument {
        detail: "API Token, Zone ID, and Record ID are required.".to_string(),
    }
}

fn not_found(record_id: &str) -> ProviderError {
    upstream_error(81044, &format!("Record {record_id} does not exist."))
}

#[async_trait]
impl DnsRecordApi for MockDnsRecordApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_records(&self, creds: &ZoneCredentials) -> Result<Vec<DnsRecord>> {
        creds.validate()?;
        self.record_call(Call::List).await?;
        Ok(self.records.read().await.clone())
    }

    async fn list_records_page(
        &self,
        creds: &ZoneCredentials,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        creds.validate()?;
        self.record_call(Call::ListPage(params.page)).await?;

        let records = self.records.read().await;
        let per_page = params.per_page.max(1) as usize;
        let page = params.page.max(1);
        let start = (page as usize - 1) * per_page;
        let items: Vec<DnsRecord> = records.iter().skip(start).take(per_page).cloned().collect();
        let total_count = u32::try_from(records.len()).unwrap_or(u32::MAX);
        let total_pages = total_count.div_ceil(params.per_page.max(1)).max(1);

        Ok(PaginatedResponse::new(
            items,
            page,
            params.per_page,
            total_count,
            total_pages,
        ))
    }

    async fn create_record(
        &self,
        creds: &ZoneCredentials,
        form: &RecordForm,
    ) -> Result<DnsRecord> {
        creds.validate()?;
        self.record_call(Call::Create(form.name.clone())).await?;

        let id = {
            let mut next = self.next_id.write().await;
            let id = format!("mock-{next}");
            *next += 1;
            id
        };
        let mut created = record(&id, form.record_type.clone(), &form.name, &form.content);
        Self::apply_form(&mut created, form);
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_record(
        &self,
        creds: &ZoneCredentials,
        record_id: &str,
        form: &RecordForm,
    ) -> Result<DnsRecord> {
        Self::require_record_id(creds, record_id)?;
        self.record_call(Call::Update(record_id.to_string())).await?;

        let mut records = self.records.write().await;
        let existing = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| not_found(record_id))?;
        Self::apply_form(existing, form);
        Ok(existing.clone())
    }

    async fn delete_record(
        &self,
        creds: &ZoneCredentials,
        record_id: &str,
    ) -> Result<DeletedRecord> {
        Self::require_record_id(creds, record_id)?;
        self.record_call(Call::Delete(record_id.to_string())).await?;

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(not_found(record_id));
        }
        Ok(DeletedRecord {
            id: record_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_pages_records() {
        let api = MockDnsRecordApi::with_records(
            (0..7)
                .map(|i| record(&format!("r{i}"), RecordType::A, "h", "192.0.2.1"))
                .collect(),
        );
        let creds = ZoneCredentials::new("t", "z");
        let params = PaginationParams { page: 2, per_page: 5 };

        let page = api.list_records_page(&creds, &params).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn upstream_error_formats_like_forwarder() {
        assert_eq!(
            upstream_error(9109, "Invalid token").to_string(),
            "Cloudflare API request failed: Error 9109: Invalid token"
        );
    }
}
