//! Cloudflare DnsRecordApi trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::traits::{DnsRecordApi, require_record_id};
use crate::types::{
    DeletedRecord, DnsRecord, PaginatedResponse, PaginationParams, RecordForm, ZoneCredentials,
};

use super::CloudflareClient;
use super::types::RecordPayload;

#[async_trait]
impl DnsRecordApi for CloudflareClient {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_records(&self, creds: &ZoneCredentials) -> Result<Vec<DnsRecord>> {
        creds.validate()?;
        let url = self.records_url(&creds.zone_id, None);
        let (records, _): (Vec<DnsRecord>, _) =
            self.request(Method::GET, &url, creds, None).await?;
        Ok(records)
    }

    async fn list_records_page(
        &self,
        creds: &ZoneCredentials,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        creds.validate()?;
        let params = params.validated();
        let url = format!(
            "{}?page={}&per_page={}",
            self.records_url(&creds.zone_id, None),
            params.page,
            params.per_page
        );
        let (records, info): (Vec<DnsRecord>, _) =
            self.request(Method::GET, &url, creds, None).await?;

        // 无 result_info 时视为最后一页
        let page = match info {
            Some(info) => PaginatedResponse::new(
                records,
                if info.page == 0 { params.page } else { info.page },
                if info.per_page == 0 {
                    params.per_page
                } else {
                    info.per_page
                },
                info.total_count,
                info.total_pages,
            ),
            None => {
                let count = u32::try_from(records.len()).unwrap_or(u32::MAX);
                PaginatedResponse::new(records, params.page, params.per_page, count, params.page)
            }
        };
        Ok(page)
    }

    async fn create_record(
        &self,
        creds: &ZoneCredentials,
        form: &RecordForm,
    ) -> Result<DnsRecord> {
        creds.validate()?;
        let url = self.records_url(&creds.zone_id, None);
        let payload = RecordPayload::from(form);
        let (record, _) = self
            .request(Method::POST, &url, creds, Some(&payload))
            .await?;
        Ok(record)
    }

    async fn update_record(
        &self,
        creds: &ZoneCredentials,
        record_id: &str,
        form: &RecordForm,
    ) -> Result<DnsRecord> {
        require_record_id(creds, record_id)?;
        let url = self.records_url(&creds.zone_id, Some(record_id));
        let payload = RecordPayload::from(form);
        let (record, _) = self
            .request(Method::PUT, &url, creds, Some(&payload))
            .await?;
        Ok(record)
    }

    async fn delete_record(
        &self,
        creds: &ZoneCredentials,
        record_id: &str,
    ) -> Result<DeletedRecord> {
        require_record_id(creds, record_id)?;
        let url = self.records_url(&creds.zone_id, Some(record_id));
        let (deleted, _) = self.request(Method::DELETE, &url, creds, None).await?;
        Ok(deleted)
    }
}
