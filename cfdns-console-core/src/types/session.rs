//! 会话状态

use cfdns_console_provider::{DnsRecord, ZoneCredentials};
use serde::{Deserialize, Serialize};

/// Values shown in the connect form before the user submits it.
///
/// `Debug` never prints the token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectForm {
    pub api_token: String,
    pub zone_id: String,
}

impl std::fmt::Debug for ConnectForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectForm")
            .field("api_token", &"***")
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

impl ConnectForm {
    /// Credentials as typed. Blank values are rejected by the forwarder.
    pub fn credentials(&self) -> ZoneCredentials {
        ZoneCredentials::new(self.api_token.clone(), self.zone_id.clone())
    }
}

impl From<&ZoneCredentials> for ConnectForm {
    fn from(creds: &ZoneCredentials) -> Self {
        Self {
            api_token: creds.api_token.clone(),
            zone_id: creds.zone_id.clone(),
        }
    }
}

/// State of one console session.
///
/// Owned by the embedding UI and passed as `&mut` into every
/// [`ConsoleController`](crate::ConsoleController) operation.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) credentials: Option<ZoneCredentials>,
    pub(crate) authenticated: bool,
    pub(crate) records: Vec<DnsRecord>,
    pub(crate) error: Option<String>,
    /// 连接表单预填值
    pub connect_form: ConnectForm,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials of the last successful connect.
    pub fn credentials(&self) -> Option<&ZoneCredentials> {
        self.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Records from the most recent successful fetch.
    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    /// Message of the last failed connect or refresh.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find_record(&self, record_id: &str) -> Option<&DnsRecord> {
        self.records.iter().find(|r| r.id == record_id)
    }

    /// 重置为初始状态
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
