//! Cloudflare HTTP 请求方法

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::ZoneCredentials;
use crate::utils::log_sanitizer::mask_secret;

use super::CloudflareClient;
use super::types::{CloudflareResponse, CloudflareResultInfo, RecordPayload};

const PROVIDER_NAME: &str = "cloudflare";

impl CloudflareClient {
    /// `<base>/zones/<zone>/dns_records[/<record>]`, path segments percent-encoded.
    pub(crate) fn records_url(&self, zone_id: &str, record_id: Option<&str>) -> String {
        let mut url = format!(
            "{}/zones/{}/dns_records",
            self.base_url,
            urlencoding::encode(zone_id)
        );
        if let Some(id) = record_id {
            url.push('/');
            url.push_str(&urlencoding::encode(id));
        }
        url
    }

    /// 执行单次请求并解析 Cloudflare 响应信封
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        creds: &ZoneCredentials,
        body: Option<&RecordPayload<'_>>,
    ) -> Result<(T, Option<CloudflareResultInfo>)> {
        log::debug!(
            "[{PROVIDER_NAME}] zone {} token {}",
            creds.zone_id,
            mask_secret(&creds.api_token)
        );

        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", creds.api_token))
            .header(CACHE_CONTROL, "no-store");

        if let Some(payload) = body {
            let bytes = serde_json::to_vec(payload).map_err(|e| {
                log::error!("[{PROVIDER_NAME}] Failed to encode request body: {e}");
                ProviderError::unknown(e)
            })?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let result = self.send(builder, method.as_str(), url).await;
        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("[{PROVIDER_NAME}] {method} {url}: {e}");
            } else {
                log::error!("[{PROVIDER_NAME}] {method} {url}: {e}");
            }
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(T, Option<CloudflareResultInfo>)> {
        let (status_code, response_text) =
            HttpUtils::execute_request(builder, PROVIDER_NAME, method_name, url).await?;

        let envelope: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, status_code, PROVIDER_NAME)?;

        unwrap_envelope(envelope)
    }
}

/// `success: false` 转为错误；成功时取出 `result`
fn unwrap_envelope<T>(
    envelope: CloudflareResponse<T>,
) -> Result<(T, Option<CloudflareResultInfo>)> {
    if !envelope.success {
        return Err(ProviderError::from_api_errors(envelope.errors));
    }
    envelope
        .result
        .map(|result| (result, envelope.result_info))
        .ok_or_else(|| ProviderError::transport("response is missing the result payload"))
}
