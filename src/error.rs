use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 平台业务错误码: access token 过期/无效
pub(crate) const ERROR_AUTH: &str = "error_auth";
/// 平台业务错误码: 签名校验失败
pub(crate) const ERROR_SIGN: &str = "error_sign";
/// 平台业务错误码: 请求参数错误
pub(crate) const ERROR_PARAM: &str = "error_param";
/// 平台业务错误码: 无权限调用
pub(crate) const ERROR_PERMISSION: &str = "error_permission";

/// Unified error type for all Shopee Open Platform operations.
///
/// Business failures keep the platform's original error shape (code, message
/// and `request_id`) so callers can log or surface them unchanged. All
/// variants are serializable for structured error reporting.
///
/// # Recovery
///
/// [`AuthExpired`](Self::AuthExpired) is the only recoverable variant: a shop
/// client with a token refresher handles it transparently with a single
/// refresh-and-replay. Nothing else is retried by this crate.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ShopeeError {
    /// The access token was rejected as expired or invalid (platform code
    /// `error_auth`).
    #[error("Access token expired or invalid: {message}")]
    AuthExpired {
        /// Error message returned by the platform.
        message: String,
        /// Request id returned by the platform, if available.
        request_id: Option<String>,
    },

    /// The request signature failed verification (platform code `error_sign`).
    ///
    /// Usually a wrong partner key, or a clock skewed outside the window the
    /// platform accepts for `timestamp`.
    #[error("Request signature rejected: {message}")]
    InvalidSignature {
        /// Error message returned by the platform.
        message: String,
        /// Request id returned by the platform, if available.
        request_id: Option<String>,
    },

    /// A request parameter is invalid (platform code `error_param`).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Error message returned by the platform.
        message: String,
        /// Request id returned by the platform, if available.
        request_id: Option<String>,
    },

    /// The partner or shop lacks permission for the endpoint (platform code
    /// `error_permission`).
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Error message returned by the platform.
        message: String,
        /// Request id returned by the platform, if available.
        request_id: Option<String>,
    },

    /// Any other business error code returned by the platform.
    ///
    /// This is a catch-all for codes not mapped to a specific variant; the
    /// raw code is preserved.
    #[error("API error '{raw_code}': {message}")]
    Api {
        /// Raw error code from the platform.
        raw_code: String,
        /// Error message returned by the platform.
        message: String,
        /// Request id returned by the platform, if available.
        request_id: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// Not retried by this crate; `retry_after` carries the platform's
    /// suggested wait when present.
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Body or status line of the rate-limit response.
        message: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, non-JSON gateway error page, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Timeouts are generic failures; they never enter the auth-replay path.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Failed to parse the platform's response body.
    #[error("Response parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body or query parameters.
    #[error("Request serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured token refresher failed or produced an unusable token.
    ///
    /// Terminal: the original request is not replayed after a failed refresh.
    #[error("Access token refresh failed: {detail}")]
    RefreshFailed {
        /// Details about the refresh failure.
        detail: String,
    },
}

impl ShopeeError {
    /// 是否为预期行为（token 过期、限流、参数错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AuthExpired { .. }
                | Self::InvalidParameter { .. }
                | Self::PermissionDenied { .. }
                | Self::RateLimited { .. }
                | Self::Api { .. }
        )
    }

    /// Whether this is the platform's expired/invalid-token failure.
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired { .. })
    }

    /// Platform request id carried by the error, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::AuthExpired { request_id, .. }
            | Self::InvalidSignature { request_id, .. }
            | Self::InvalidParameter { request_id, .. }
            | Self::PermissionDenied { request_id, .. }
            | Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// 将平台返回的业务错误码映射为 [`ShopeeError`]
pub(crate) fn map_api_error(
    code: &str,
    message: String,
    request_id: Option<String>,
) -> ShopeeError {
    match code {
        ERROR_AUTH => ShopeeError::AuthExpired {
            message,
            request_id,
        },
        ERROR_SIGN => ShopeeError::InvalidSignature {
            message,
            request_id,
        },
        ERROR_PARAM => ShopeeError::InvalidParameter {
            message,
            request_id,
        },
        ERROR_PERMISSION => ShopeeError::PermissionDenied {
            message,
            request_id,
        },
        _ => ShopeeError::Api {
            raw_code: code.to_string(),
            message,
            request_id,
        },
    }
}

/// Convenience type alias for `Result<T, ShopeeError>`.
pub type Result<T> = std::result::Result<T, ShopeeError>;
