//! 日志脱敏
//!
//! Response bodies can hold long TXT/DKIM payloads, and request logs would
//! otherwise carry the bearer token. Everything the forwarder logs passes
//! through one of these two helpers.

/// Byte budget for a logged response body.
const BODY_LOG_LIMIT: usize = 256;

/// Shorten `body` to [`BODY_LOG_LIMIT`] bytes on a char boundary, noting the
/// original size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= BODY_LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// Mask a secret for logs, keeping only its last four characters.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        return "***".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("***{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(BODY_LOG_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(BODY_LOG_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", BODY_LOG_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_body_cut_on_char_boundary() {
        // 每个字 3 字节，256 不是 3 的倍数
        let s = "你".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"你".repeat(85)));
        assert!(result.ends_with("... [truncated, total 600 bytes]"));
    }

    #[test]
    fn short_secrets_fully_masked() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn long_secrets_keep_tail() {
        assert_eq!(mask_secret("0123456789abcdef"), "***cdef");
    }
}
