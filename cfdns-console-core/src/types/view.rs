//! 记录表格的搜索与排序

use std::cmp::Ordering;

use cfdns_console_provider::DnsRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record column a table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Type,
    Name,
    Content,
    Ttl,
    Proxied,
    Proxiable,
    Locked,
    ZoneName,
    Comment,
    CreatedOn,
    ModifiedOn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Search term plus optional sort, applied to the session's records for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub search: String,
    pub sort: Option<SortConfig>,
}

impl RecordView {
    /// Clicking the same column while ascending flips it; anything else sorts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(SortConfig {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Whether `record` passes the search filter.
    pub fn matches(&self, record: &DnsRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.content.to_lowercase().contains(&needle)
    }

    /// Filter, then stable-sort.
    ///
    /// Records without a value for the sort column go last in either
    /// direction, keeping their relative order.
    pub fn apply<'a>(&self, records: &'a [DnsRecord]) -> Vec<&'a DnsRecord> {
        let mut visible: Vec<&DnsRecord> = records.iter().filter(|r| self.matches(r)).collect();
        if let Some(config) = self.sort {
            visible.sort_by(|a, b| {
                sort_value(a, config.key).compare(&sort_value(b, config.key), config.direction)
            });
        }
        visible
    }
}

enum SortValue<'a> {
    Text(&'a str),
    Number(u32),
    Flag(bool),
    Time(DateTime<Utc>),
    Missing,
}

impl SortValue<'_> {
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Flag(_) => 2,
            Self::Time(_) => 3,
            Self::Missing => 4,
        }
    }

    /// Total order for `sort_by`: values of one kind by `direction`, kinds in
    /// a fixed order with `Missing` last.
    fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        let ord = match (self, other) {
            (Self::Text(a), Self::Text(b)) => locale_cmp(a, b),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            // true 排在前面
            (Self::Flag(a), Self::Flag(b)) => b.cmp(a),
            (Self::Time(a), Self::Time(b)) => a.cmp(b),
            _ => return self.kind_rank().cmp(&other.kind_rank()),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

fn sort_value(record: &DnsRecord, key: SortKey) -> SortValue<'_> {
    match key {
        SortKey::Type => SortValue::Text(record.record_type.as_str()),
        SortKey::Name => SortValue::Text(&record.name),
        SortKey::Content => SortValue::Text(&record.content),
        SortKey::Ttl => SortValue::Number(record.ttl),
        SortKey::Proxied => SortValue::Flag(record.proxied),
        SortKey::Proxiable => SortValue::Flag(record.proxiable),
        SortKey::Locked => SortValue::Flag(record.locked),
        SortKey::ZoneName => record
            .zone_name
            .as_deref()
            .map_or(SortValue::Missing, SortValue::Text),
        SortKey::Comment => record
            .comment
            .as_deref()
            .map_or(SortValue::Missing, SortValue::Text),
        SortKey::CreatedOn => record.created_on.map_or(SortValue::Missing, SortValue::Time),
        SortKey::ModifiedOn => record
            .modified_on
            .map_or(SortValue::Missing, SortValue::Time),
    }
}

/// Primary weight of a lowercased char, close to the default ICU root
/// collation for hostnames: `_` before `-` before other punctuation, then
/// digits, then letters.
fn collation_key(c: char) -> (u8, char) {
    let group = match c {
        '_' => 0,
        '-' => 1,
        c if c.is_ascii_punctuation() || c.is_whitespace() => 2,
        c if c.is_ascii_digit() => 3,
        _ => 4,
    };
    (group, c)
}

/// Case-insensitive order, ties broken with lowercase before uppercase.
///
/// Not a full Unicode collation: non-ASCII letters compare by code point.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.to_lowercase().chars().map(collation_key).collect::<Vec<_>>();
    fold(a).cmp(&fold(b)).then_with(|| {
        for (x, y) in a.chars().zip(b.chars()) {
            if x != y {
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
        }
        a.len().cmp(&b.len())
    })
}
