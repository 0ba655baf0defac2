//! Controller-side types

mod notice;
mod session;
mod view;

pub use notice::{Notice, NoticeLevel};
pub use session::{ConnectForm, Session};
pub use view::{RecordView, SortConfig, SortDirection, SortKey};

// Re-export provider types used throughout the controller API
pub use cfdns_console_provider::{
    DeletedRecord, DnsRecord, PaginatedResponse, PaginationParams, RecordExtra, RecordForm,
    RecordType, ZoneCredentials,
};
