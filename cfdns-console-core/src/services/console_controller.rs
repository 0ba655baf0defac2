//! 控制台业务流程
//!
//! Connect, refresh, create/update, delete and logout for one zone. Every
//! operation mutates the caller's [`Session`] and returns the notices to show.

use std::sync::Arc;

use cfdns_console_provider::{
    DnsRecord, DnsRecordApi, PaginationParams, RecordForm, ZoneCredentials,
};

use crate::error::{CoreError, CoreResult};
use crate::services::record_form::validate_record_form;
use crate::traits::CredentialCache;
use crate::types::{ConnectForm, Notice, RecordView, Session};

/// 默认每页记录数
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// 单次刷新最多请求的页数
pub const DEFAULT_MAX_PAGES: u32 = 100;

const CONNECTED: &str = "Connected to Cloudflare and records fetched.";
const REFRESHED: &str = "DNS records refreshed.";
const CREATED: &str = "DNS record created successfully.";
const UPDATED: &str = "DNS record updated successfully.";
const DELETED: &str = "DNS record deleted successfully.";

/// 控制台控制器
pub struct ConsoleController<A: DnsRecordApi> {
    api: A,
    cache: Arc<dyn CredentialCache>,
    page_size: u32,
    max_pages: u32,
}

impl<A: DnsRecordApi> ConsoleController<A> {
    pub fn new(api: A, cache: Arc<dyn CredentialCache>) -> Self {
        Self {
            api,
            cache,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Override page size and page cap used when fetching the record set.
    #[must_use]
    pub fn with_paging(mut self, page_size: u32, max_pages: u32) -> Self {
        self.page_size = page_size;
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 连接：拉取完整记录集，成功后保存凭证
    pub async fn connect(&self, session: &mut Session, creds: ZoneCredentials) -> Vec<Notice> {
        session.error = None;

        match self.fetch_all(&creds).await {
            Ok(records) => {
                log::info!(
                    "[{}] Connected to zone {} ({} records)",
                    self.api.id(),
                    creds.zone_id,
                    records.len()
                );
                if let Err(e) = self.cache.save(&creds).await {
                    log::warn!("Failed to cache credentials: {e}");
                }
                session.records = records;
                session.connect_form = ConnectForm::from(&creds);
                session.credentials = Some(creds);
                session.authenticated = true;
                vec![Notice::success(CONNECTED)]
            }
            Err(e) => {
                log_error("connect", &e);
                session.authenticated = false;
                session.error = Some(e.to_string());
                vec![Notice::from(&e)]
            }
        }
    }

    /// 刷新：重新拉取记录。失败时保留现有记录
    pub async fn refresh(&self, session: &mut Session) -> Vec<Notice> {
        let Some(creds) = session.credentials.clone() else {
            return vec![Notice::from(&CoreError::NotConnected)];
        };
        session.error = None;

        match self.fetch_all(&creds).await {
            Ok(records) => {
                log::debug!("Refreshed {} records", records.len());
                session.records = records;
                vec![Notice::success(REFRESHED)]
            }
            Err(e) => {
                log_error("refresh", &e);
                session.error = Some(e.to_string());
                vec![Notice::from(&e)]
            }
        }
    }

    /// 保存记录：`editing` 为 `Some(id)` 时更新，否则创建。成功后刷新
    pub async fn save_record(
        &self,
        session: &mut Session,
        editing: Option<&str>,
        form: &RecordForm,
    ) -> Vec<Notice> {
        let Some(creds) = session.credentials.clone() else {
            return vec![Notice::from(&CoreError::NotConnected)];
        };

        let edited = editing.and_then(|id| session.find_record(id));
        if let Err(e) = validate_record_form(form, edited) {
            log_error("save_record", &e);
            return vec![Notice::from(&e)];
        }

        let result = match editing {
            Some(record_id) => self
                .api
                .update_record(&creds, record_id, form)
                .await
                .map(|_| UPDATED),
            None => self.api.create_record(&creds, form).await.map(|_| CREATED),
        };

        match result {
            Ok(message) => self.then_refresh(session, message).await,
            Err(e) => {
                let e = CoreError::from(e);
                log_error("save_record", &e);
                vec![Notice::from(&e)]
            }
        }
    }

    /// 删除记录，成功后刷新
    pub async fn delete_record(&self, session: &mut Session, record_id: &str) -> Vec<Notice> {
        let Some(creds) = session.credentials.clone() else {
            return vec![Notice::from(&CoreError::NotConnected)];
        };

        match self.api.delete_record(&creds, record_id).await {
            Ok(deleted) => {
                log::info!("Deleted record {}", deleted.id);
                self.then_refresh(session, DELETED).await
            }
            Err(e) => {
                let e = CoreError::from(e);
                log_error("delete_record", &e);
                vec![Notice::from(&e)]
            }
        }
    }

    /// 登出：清空会话和缓存
    pub async fn logout(&self, session: &mut Session) -> Vec<Notice> {
        session.clear();
        if let Err(e) = self.cache.clear().await {
            log::warn!("Failed to clear cached credentials: {e}");
        }
        vec![Notice::info("Logged Out", "You have been logged out.")]
    }

    /// 从缓存预填连接表单，不会自动认证。返回是否预填
    pub async fn restore(&self, session: &mut Session) -> bool {
        match self.cache.load().await {
            Ok(Some(creds)) => {
                session.connect_form = ConnectForm::from(&creds);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("Failed to load cached credentials: {e}");
                false
            }
        }
    }

    /// Records of `session` after applying `view`.
    pub fn visible_records<'s>(&self, session: &'s Session, view: &RecordView) -> Vec<&'s DnsRecord> {
        view.apply(&session.records)
    }

    async fn then_refresh(&self, session: &mut Session, message: &str) -> Vec<Notice> {
        let mut notices = vec![Notice::success(message)];
        notices.extend(self.refresh(session).await);
        notices
    }

    /// 按页拉取直到 `has_more` 为 false，最多 `max_pages` 页
    async fn fetch_all(&self, creds: &ZoneCredentials) -> CoreResult<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut params = PaginationParams {
            page: 1,
            per_page: self.page_size,
        };

        loop {
            let page = self.api.list_records_page(creds, &params).await?;
            records.extend(page.items);
            if !page.has_more {
                break;
            }
            if params.page >= self.max_pages {
                log::warn!(
                    "Stopped after {} pages; zone reports {} records",
                    params.page,
                    page.total_count
                );
                break;
            }
            params.page += 1;
        }

        Ok(records)
    }
}

fn log_error(operation: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("[{operation}] {e}");
    } else {
        log::error!("[{operation}] {e}");
    }
}
