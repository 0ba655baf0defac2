//! Cloudflare API 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiErrorItem;
use crate::types::{DnsRecord, RecordExtra, RecordForm, RecordType};

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
    pub result_info: Option<CloudflareResultInfo>,
}

/// 分页信息
#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Cloudflare DNS Record 结构（线上格式）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub proxied: bool,
    pub ttl: u32,
    #[serde(default)]
    pub locked: bool,
    /// SRV/CAA/URI 等复杂记录类型的结构化数据
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_on: Option<DateTime<Utc>>,
    /// 未建模的字段（meta、settings 等），原样保留
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// SRV 记录的 data 字段
#[derive(Debug, Serialize, Deserialize)]
pub struct CloudflareSrvData {
    #[serde(default)]
    pub priority: Option<u16>,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// CAA 记录的 data 字段
#[derive(Debug, Serialize, Deserialize)]
pub struct CloudflareCaaData {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

/// URI 记录的 data 字段
#[derive(Debug, Serialize, Deserialize)]
pub struct CloudflareUriData {
    pub weight: u16,
    pub target: String,
}

/// Create/update request body.
#[derive(Debug, Serialize)]
pub struct RecordPayload<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a RecordType,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    pub proxied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl<'a> From<&'a RecordForm> for RecordPayload<'a> {
    fn from(form: &'a RecordForm) -> Self {
        // 仅 MX 记录携带 priority
        let priority = if form.record_type == RecordType::Mx {
            form.priority
        } else {
            None
        };
        Self {
            record_type: &form.record_type,
            name: &form.name,
            content: &form.content,
            ttl: form.ttl,
            proxied: form.proxied.unwrap_or(false),
            priority,
        }
    }
}

fn meta_priority(meta: Option<&Value>) -> Option<u16> {
    meta?
        .get("priority")?
        .as_u64()
        .and_then(|p| u16::try_from(p).ok())
}

fn parse_data<T: for<'de> Deserialize<'de>>(data: Option<&Value>) -> Option<T> {
    data.and_then(|v| serde_json::from_value(v.clone()).ok())
}

fn extra_from_wire(record: &CloudflareDnsRecord) -> RecordExtra {
    let data = record.data.as_ref();
    match record.record_type {
        RecordType::Mx => record
            .priority
            .or_else(|| meta_priority(record.other.get("meta")))
            .map_or(RecordExtra::None, |priority| RecordExtra::Mx { priority }),
        RecordType::Srv => match parse_data::<CloudflareSrvData>(data) {
            Some(srv) => RecordExtra::Srv {
                priority: srv.priority.or(record.priority).unwrap_or_default(),
                weight: srv.weight,
                port: srv.port,
                target: srv.target,
            },
            None => RecordExtra::None,
        },
        RecordType::Caa => match parse_data::<CloudflareCaaData>(data) {
            Some(caa) => RecordExtra::Caa {
                flags: caa.flags,
                tag: caa.tag,
                value: caa.value,
            },
            None => RecordExtra::None,
        },
        RecordType::Uri => match parse_data::<CloudflareUriData>(data) {
            Some(uri) => RecordExtra::Uri {
                priority: record.priority.unwrap_or_default(),
                weight: uri.weight,
                target: uri.target,
            },
            None => RecordExtra::None,
        },
        _ => RecordExtra::None,
    }
}

impl From<CloudflareDnsRecord> for DnsRecord {
    fn from(wire: CloudflareDnsRecord) -> Self {
        let extra = extra_from_wire(&wire);
        let mut other = wire.other;
        // 无法解析的 data 放回 other，序列化时原样写出
        if extra == RecordExtra::None
            && let Some(data) = wire.data
        {
            other.insert("data".to_string(), data);
        }
        Self {
            id: wire.id,
            zone_id: wire.zone_id,
            zone_name: wire.zone_name,
            name: wire.name,
            record_type: wire.record_type,
            content: wire.content,
            ttl: wire.ttl,
            proxiable: wire.proxiable,
            proxied: wire.proxied,
            locked: wire.locked,
            extra,
            comment: wire.comment,
            tags: wire.tags,
            created_on: wire.created_on,
            modified_on: wire.modified_on,
            other,
        }
    }
}

impl From<DnsRecord> for CloudflareDnsRecord {
    fn from(record: DnsRecord) -> Self {
        let (priority, data) = match record.extra {
            RecordExtra::Mx { priority } => (Some(priority), None),
            RecordExtra::Srv {
                priority,
                weight,
                port,
                target,
            } => (
                Some(priority),
                serde_json::to_value(CloudflareSrvData {
                    priority: Some(priority),
                    weight,
                    port,
                    target,
                })
                .ok(),
            ),
            RecordExtra::Caa { flags, tag, value } => (
                None,
                serde_json::to_value(CloudflareCaaData { flags, tag, value }).ok(),
            ),
            RecordExtra::Uri {
                priority,
                weight,
                target,
            } => (
                Some(priority),
                serde_json::to_value(CloudflareUriData { weight, target }).ok(),
            ),
            RecordExtra::None => (None, None),
        };
        Self {
            id: record.id,
            zone_id: record.zone_id,
            zone_name: record.zone_name,
            name: record.name,
            record_type: record.record_type,
            content: record.content,
            priority,
            proxiable: record.proxiable,
            proxied: record.proxied,
            ttl: record.ttl,
            locked: record.locked,
            data,
            comment: record.comment,
            tags: record.tags,
            created_on: record.created_on,
            modified_on: record.modified_on,
            other: record.other,
        }
    }
}
