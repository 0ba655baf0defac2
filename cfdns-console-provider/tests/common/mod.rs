//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use cfdns_console_provider::{
    CloudflareClient, DnsRecordApi, RecordForm, RecordType, ZoneCredentials,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 获取测试记录表单（创建和更新）
pub fn get_test_record_forms(record_type: RecordType) -> (RecordForm, RecordForm) {
    let name = generate_test_record_name();
    let (first, second, priority) = match record_type {
        RecordType::A => ("192.0.2.1", "192.0.2.2", None),
        RecordType::Aaaa => ("2001:db8::1", "2001:db8::2", None),
        RecordType::Cname => ("target1.example.com", "target2.example.com", None),
        RecordType::Mx => ("mail1.example.com", "mail2.example.com", Some(10)),
        _ => ("test-value-1", "test-value-2", None),
    };
    let create = RecordForm {
        record_type: record_type.clone(),
        name: name.clone(),
        content: first.to_string(),
        ttl: 600,
        proxied: Some(false),
        priority,
    };
    let update = RecordForm {
        content: second.to_string(),
        ttl: 1,
        priority: priority.map(|p| p + 10),
        ..create.clone()
    };
    (create, update)
}

/// 测试上下文 - 封装 Client 和测试 Zone
pub struct TestContext {
    pub client: CloudflareClient,
    pub creds: ZoneCredentials,
}

impl TestContext {
    /// 创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let zone_id = env::var("CLOUDFLARE_ZONE_ID").ok()?;

        Some(Self {
            client: CloudflareClient::new(),
            creds: ZoneCredentials::new(api_token, zone_id),
        })
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, record_id: &str) {
        let _ = self.client.delete_record(&self.creds, record_id).await;
    }

    /// 查找并清理所有测试记录（名称包含 _test- 的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.client.list_records(&self.creds).await {
            for record in records {
                if record.name.contains("_test-") {
                    self.cleanup_record(&record.id).await;
                }
            }
        }
    }
}
