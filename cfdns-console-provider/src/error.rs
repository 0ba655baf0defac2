use serde::{Deserialize, Serialize};

/// Prefix shared by every upstream failure message.
pub const UPSTREAM_FAILURE_PREFIX: &str = "Cloudflare API request failed";

/// Detail used when the provider reports failure without any error entries.
pub const NO_ERROR_DETAILS: &str = "no error details reported";

/// Message of [`ProviderError::Unknown`].
pub const UNKNOWN_FAILURE_MESSAGE: &str =
    "An unknown error occurred while communicating with Cloudflare API.";

/// One `(code, message)` pair from the `errors` array of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorItem {
    /// Numeric Cloudflare error code.
    pub code: i64,
    /// Human-readable message attached to the code.
    pub message: String,
}

impl std::fmt::Display for ApiErrorItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

/// Error type for all record operations.
///
/// The taxonomy is deliberately small:
/// - [`InvalidArgument`](Self::InvalidArgument) is raised before any network call.
/// - [`Upstream`](Self::Upstream) covers provider-reported failures as well as
///   transport and parsing failures.
/// - [`Unknown`](Self::Unknown) covers failures of unrecognized shape.
///
/// Nothing is retried. Every variant is serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A required identifier (API token, zone id or record id) is empty.
    InvalidArgument {
        /// Description of what is missing.
        detail: String,
    },

    /// The provider reported failure, or the round trip itself failed.
    Upstream {
        /// Joined `"Error <code>: <message>"` list, or the transport/parse failure text.
        detail: String,
        /// Raw error entries from the envelope, in provider order. Empty for
        /// transport and parse failures.
        #[serde(default)]
        errors: Vec<ApiErrorItem>,
    },

    /// A failure that fits neither of the above (request building, payload encoding).
    Unknown {
        /// Underlying failure text, kept for logs.
        detail: String,
    },
}

/// Classification of upstream failures by Cloudflare error code.
///
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpstreamCategory {
    /// Token missing, malformed, expired or lacking access.
    InvalidCredentials,
    /// The record payload was rejected by validation.
    InvalidParameter,
    /// A conflicting record already exists.
    RecordExists,
    /// The addressed record does not exist.
    RecordNotFound,
    /// The zone record quota is exhausted.
    QuotaExceeded,
    /// The zone id does not route to a zone.
    ZoneNotFound,
    /// Transport failure, parse failure, or an unmapped code.
    Other,
}

impl UpstreamCategory {
    /// Map a single Cloudflare error code.
    pub fn from_code(code: i64) -> Self {
        match code {
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9109: Unauthorized to access requested resource
            // 10000: Authentication error
            6003 | 6103 | 6111 | 9109 | 10000 => Self::InvalidCredentials,

            // 1004: DNS Validation Error
            // 9000: Invalid or missing name
            // 9005/9006: Content for A/AAAA record is invalid
            // 9009: Content for MX record must be a hostname
            // 9021: Invalid TTL
            // 9041: This DNS record cannot be proxied
            1004 | 9000 | 9005 | 9006 | 9009 | 9021 | 9041 => Self::InvalidParameter,

            // 81053..=81058: A record with that host/settings already exists
            81053..=81058 => Self::RecordExists,

            // 81044: Record does not exist
            81044 => Self::RecordNotFound,

            // 81045: The record quota has been exceeded
            81045 => Self::QuotaExceeded,

            // 7000: No route for that URI
            // 7003: Could not route, object identifier is invalid
            7000 | 7003 => Self::ZoneNotFound,

            _ => Self::Other,
        }
    }
}

impl ProviderError {
    pub(crate) fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            detail: detail.into(),
        }
    }

    /// Upstream failure built from the envelope's error list.
    pub(crate) fn from_api_errors(errors: Vec<ApiErrorItem>) -> Self {
        let detail = if errors.is_empty() {
            NO_ERROR_DETAILS.to_string()
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self::Upstream { detail, errors }
    }

    /// Upstream failure that did not come from an error envelope.
    pub(crate) fn transport(detail: impl ToString) -> Self {
        Self::Upstream {
            detail: detail.to_string(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn unknown(detail: impl ToString) -> Self {
        Self::Unknown {
            detail: detail.to_string(),
        }
    }

    /// Classification of the first provider error code, if this is an upstream error.
    #[must_use]
    pub fn category(&self) -> Option<UpstreamCategory> {
        match self {
            Self::Upstream { errors, .. } => Some(
                errors
                    .first()
                    .map_or(UpstreamCategory::Other, |e| UpstreamCategory::from_code(e.code)),
            ),
            _ => None,
        }
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,
            Self::Upstream { .. } => !matches!(self.category(), Some(UpstreamCategory::Other)),
            Self::Unknown { .. } => false,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { detail } => write!(f, "{detail}"),
            Self::Upstream { detail, .. } => write!(f, "{UPSTREAM_FAILURE_PREFIX}: {detail}"),
            Self::Unknown { .. } => write!(f, "{UNKNOWN_FAILURE_MESSAGE}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
