use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ProviderError, Result};
use crate::providers::cloudflare::CloudflareDnsRecord;

// ============ Credentials ============

/// API token plus zone id: everything needed to address one zone.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCredentials {
    /// Cloudflare API token, sent as a bearer credential.
    pub api_token: String,
    /// Opaque zone identifier.
    pub zone_id: String,
}

impl ZoneCredentials {
    pub fn new(api_token: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            zone_id: zone_id.into(),
        }
    }

    /// Fails with [`ProviderError::InvalidArgument`] when either value is blank.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() || self.zone_id.trim().is_empty() {
            return Err(ProviderError::invalid_argument(
                "API Token and Zone ID are required.",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ZoneCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneCredentials")
            .field("api_token", &"***")
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

// ============ Pagination ============

/// Smallest `per_page` the records endpoint accepts.
pub const MIN_PAGE_SIZE: u32 = 5;
/// Largest `per_page` requested by this crate.
pub const MAX_PAGE_SIZE: u32 = 5000;

/// Pagination parameters for [`list_records_page`](crate::DnsRecordApi::list_records_page).
///
/// Pages are 1-indexed. The default is `page = 1, per_page = 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of records per page.
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}

impl PaginationParams {
    /// Clamp to the ranges the records endpoint accepts.
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a page, computing [`has_more`](Self::has_more) from `total_pages`.
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total_count: u32, total_pages: u32) -> Self {
        Self {
            items,
            page,
            per_page,
            total_count,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

// ============ Record Types ============

/// DNS record type.
///
/// Serialized as the uppercase string the provider uses. Types this crate does
/// not name are preserved in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Srv,
    Ns,
    Caa,
    Ptr,
    Spf,
    Cert,
    Dnskey,
    Ds,
    Naptr,
    Smimea,
    Sshfp,
    Svcb,
    Tlsa,
    Uri,
    /// Any other provider-recognized type, uppercased.
    Other(String),
}

impl RecordType {
    /// Types offered when creating or editing a record.
    pub const SELECTABLE: [Self; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Txt,
        Self::Srv,
        Self::Ns,
        Self::Caa,
        Self::Ptr,
        Self::Spf,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
            Self::Caa => "CAA",
            Self::Ptr => "PTR",
            Self::Spf => "SPF",
            Self::Cert => "CERT",
            Self::Dnskey => "DNSKEY",
            Self::Ds => "DS",
            Self::Naptr => "NAPTR",
            Self::Smimea => "SMIMEA",
            Self::Sshfp => "SSHFP",
            Self::Svcb => "SVCB",
            Self::Tlsa => "TLSA",
            Self::Uri => "URI",
            Self::Other(s) => s,
        }
    }

    /// Whether the provider can proxy records of this type.
    pub fn is_proxiable(&self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }

    /// Whether this type can be picked in a record form.
    pub fn is_selectable(&self) -> bool {
        Self::SELECTABLE.contains(self)
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "NS" => Self::Ns,
            "CAA" => Self::Caa,
            "PTR" => Self::Ptr,
            "SPF" => Self::Spf,
            "CERT" => Self::Cert,
            "DNSKEY" => Self::Dnskey,
            "DS" => Self::Ds,
            "NAPTR" => Self::Naptr,
            "SMIMEA" => Self::Smimea,
            "SSHFP" => Self::Sshfp,
            "SVCB" => Self::Svcb,
            "TLSA" => Self::Tlsa,
            "URI" => Self::Uri,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ TTL ============

/// TTL sentinel meaning "let the provider choose".
pub const AUTO_TTL: u32 = 1;
/// Smallest explicit TTL in seconds.
pub const MIN_TTL: u32 = 60;
/// Largest explicit TTL in seconds.
pub const MAX_TTL: u32 = 86_400;

/// `true` for the automatic sentinel or a value within `MIN_TTL..=MAX_TTL`.
pub fn is_valid_ttl(ttl: u32) -> bool {
    ttl == AUTO_TTL || (MIN_TTL..=MAX_TTL).contains(&ttl)
}

/// Render a TTL for display: `"Auto"` for the sentinel, seconds otherwise.
pub fn format_ttl(ttl: u32) -> String {
    if ttl == AUTO_TTL {
        "Auto".to_string()
    } else {
        ttl.to_string()
    }
}

// ============ Records ============

/// Type-specific extra fields of a record.
///
/// Each variant carries the typed fields of one record type. Types with no
/// extra fields use [`None`](Self::None).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordExtra {
    /// MX: preference of this mail exchanger (lower = preferred).
    Mx { priority: u16 },
    /// SRV: service locator fields.
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    /// CAA: certificate authority authorization fields.
    Caa { flags: u8, tag: String, value: String },
    /// URI: target plus ordering fields.
    Uri {
        priority: u16,
        weight: u16,
        target: String,
    },
    #[default]
    None,
}

/// A DNS resource record as known to the provider.
///
/// (De)serializes in the provider's wire shape, so a list or create result
/// passes through unchanged. Attributes without a typed field here (`meta`,
/// `settings`, `comment_modified_on`, ...) are carried verbatim in
/// [`other`](Self::other).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CloudflareDnsRecord", into = "CloudflareDnsRecord")]
pub struct DnsRecord {
    /// Provider-assigned identifier, immutable once created.
    pub id: String,
    /// Owning zone id. Omitted by some API versions.
    pub zone_id: Option<String>,
    /// Owning zone name. Omitted by some API versions.
    pub zone_name: Option<String>,
    /// Fully qualified record name.
    pub name: String,
    pub record_type: RecordType,
    /// Value payload. Semantics depend on the type.
    pub content: String,
    /// Seconds, or [`AUTO_TTL`].
    pub ttl: u32,
    /// Computed by the provider. Read-only.
    pub proxiable: bool,
    pub proxied: bool,
    /// Read-only.
    pub locked: bool,
    pub extra: RecordExtra,
    pub comment: Option<String>,
    pub tags: Vec<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    /// Remaining provider attributes, keyed by wire name.
    pub other: Map<String, Value>,
}

impl DnsRecord {
    /// Priority carried by MX, SRV and URI records.
    pub fn priority(&self) -> Option<u16> {
        match &self.extra {
            RecordExtra::Mx { priority }
            | RecordExtra::Srv { priority, .. }
            | RecordExtra::Uri { priority, .. } => Some(*priority),
            RecordExtra::Caa { .. } | RecordExtra::None => None,
        }
    }
}

/// Confirmation returned by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// Identifier of the record that no longer exists.
    pub id: String,
}

// ============ Form ============

/// Priority prefilled for MX records.
pub const DEFAULT_MX_PRIORITY: u16 = 10;
/// TTL prefilled for new records.
pub const DEFAULT_FORM_TTL: u32 = 3600;

/// User-entered fields of a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    /// Sent as `false` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Only sent for MX records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            record_type: RecordType::A,
            name: String::new(),
            content: String::new(),
            ttl: DEFAULT_FORM_TTL,
            proxied: Some(false),
            priority: Some(DEFAULT_MX_PRIORITY),
        }
    }
}

impl RecordForm {
    /// Prefill an edit form from an existing record.
    pub fn from_record(record: &DnsRecord) -> Self {
        let priority = record.priority().or_else(|| {
            (record.record_type == RecordType::Mx).then_some(DEFAULT_MX_PRIORITY)
        });
        Self {
            record_type: record.record_type.clone(),
            name: record.name.clone(),
            content: record.content.clone(),
            ttl: record.ttl,
            proxied: Some(record.proxied),
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_parses_case_insensitively() {
        assert_eq!(RecordType::from("aaaa"), RecordType::Aaaa);
        assert_eq!(RecordType::from("Mx"), RecordType::Mx);
    }

    #[test]
    fn record_type_keeps_unknown_types() {
        let t = RecordType::from("loc");
        assert_eq!(t, RecordType::Other("LOC".to_string()));
        assert_eq!(t.to_string(), "LOC");
    }

    #[test]
    fn record_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RecordType::Cname).unwrap(), "\"CNAME\"");
        let t: RecordType = serde_json::from_str("\"SVCB\"").unwrap();
        assert_eq!(t, RecordType::Svcb);
    }

    #[test]
    fn selectable_types() {
        assert!(RecordType::Spf.is_selectable());
        assert!(!RecordType::Tlsa.is_selectable());
        assert_eq!(RecordType::SELECTABLE.len(), 10);
    }

    #[test]
    fn proxiable_types() {
        assert!(RecordType::A.is_proxiable());
        assert!(RecordType::Cname.is_proxiable());
        assert!(!RecordType::Mx.is_proxiable());
    }

    #[test]
    fn ttl_bounds() {
        assert!(is_valid_ttl(1));
        assert!(is_valid_ttl(60));
        assert!(is_valid_ttl(86_400));
        assert!(!is_valid_ttl(0));
        assert!(!is_valid_ttl(30));
        assert!(!is_valid_ttl(86_401));
    }

    #[test]
    fn ttl_formatting() {
        assert_eq!(format_ttl(1), "Auto");
        assert_eq!(format_ttl(300), "300");
    }

    #[test]
    fn credentials_require_both_values() {
        assert!(ZoneCredentials::new("tok", "zone").validate().is_ok());
        assert!(matches!(
            ZoneCredentials::new("", "zone").validate(),
            Err(ProviderError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ZoneCredentials::new("tok", "  ").validate(),
            Err(ProviderError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let creds = ZoneCredentials::new("super-secret", "zone-1");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("zone-1"));
    }

    #[test]
    fn pagination_is_clamped() {
        let p = PaginationParams {
            page: 0,
            per_page: 1,
        }
        .validated();
        assert_eq!((p.page, p.per_page), (1, MIN_PAGE_SIZE));

        let p = PaginationParams {
            page: 3,
            per_page: 100_000,
        }
        .validated();
        assert_eq!((p.page, p.per_page), (3, MAX_PAGE_SIZE));
    }

    #[test]
    fn paginated_response_has_more() {
        let page = PaginatedResponse::new(vec![1, 2], 1, 2, 5, 3);
        assert!(page.has_more);
        let last = PaginatedResponse::new(vec![5], 3, 2, 5, 3);
        assert!(!last.has_more);
    }

    #[test]
    fn default_form_matches_create_defaults() {
        let form = RecordForm::default();
        assert_eq!(form.record_type, RecordType::A);
        assert_eq!(form.ttl, 3600);
        assert_eq!(form.proxied, Some(false));
        assert_eq!(form.priority, Some(10));
    }
}
