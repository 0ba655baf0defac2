//! Generic HTTP client tools
//!
//! Sending, logging and reading responses are shared here. Envelope
//! interpretation stays with the provider module.
//!
//! # design principles
//! - **One request per call** - nothing here retries or caches
//! - **Transport failures are upstream failures** - connect, timeout and body
//!   read errors all surface as [`ProviderError::Upstream`]
//! - **Unrecognized failures stay opaque** - errors that are not about the
//!   round trip become [`ProviderError::Unknown`]

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging, must not carry secrets)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| classify_send_error(&e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            ProviderError::transport(format!("Failed to read response body: {e}"))
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// A body that does not parse is an upstream failure; the HTTP status is
    /// included so HTML error pages from intermediaries are recognizable.
    pub fn parse_json<T>(
        response_text: &str,
        status_code: u16,
        provider_name: &str,
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::transport(format!(
                "Malformed response body (HTTP {status_code}): {e}"
            ))
        })
    }
}

/// Send failures about the round trip itself are upstream failures; anything
/// else (an unbuildable request, a body that would not encode) is unknown.
fn classify_send_error(e: &reqwest::Error) -> ProviderError {
    if e.is_builder() {
        ProviderError::unknown(e)
    } else {
        ProviderError::transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Foo {
        x: i32,
    }

    #[test]
    fn parse_json_valid() {
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#, 200, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_is_upstream_with_status() {
        let result: Result<Foo, ProviderError> =
            HttpUtils::parse_json("<html>Bad Gateway</html>", 502, "test");
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(matches!(err, ProviderError::Upstream { .. }));
        assert!(err.to_string().contains("HTTP 502"), "{err}");
    }

    #[tokio::test]
    async fn connection_refused_is_upstream() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{port}/unreachable");
        let client = reqwest::Client::new();
        let result = HttpUtils::execute_request(client.get(&url), "test", "GET", &url).await;
        assert!(matches!(result, Err(ProviderError::Upstream { .. })));
    }

    #[tokio::test]
    async fn invalid_url_is_unknown() {
        let client = reqwest::Client::new();
        let result =
            HttpUtils::execute_request(client.get("not a url"), "test", "GET", "not a url").await;
        assert!(matches!(result, Err(ProviderError::Unknown { .. })));
    }
}
