//! HTTP 执行与响应解码
//!
//! 客户端自行构造签名 URL 与 `RequestBuilder`，这里统一发送、日志与解码。
//! 平台把业务错误放在响应 body 的 `error`/`message`/`request_id` 字段里，
//! HTTP 状态码并不可靠（部分业务错误也以 200 返回），所以解码永远先看 body。

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{Result, ShopeeError, map_api_error};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// 发送请求并读取响应文本
///
/// 统一处理：日志、超时/网络错误分类、HTTP 429 限流。
/// 超时是普通失败，不会进入 token 刷新重放路径。
pub(crate) async fn execute(
    request: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<(u16, String)> {
    log::debug!("[shopee] {method} {path}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ShopeeError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ShopeeError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[shopee] Response Status: {status}");

    // 读 body 之前先取 Retry-After
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if status == 429 {
        let body = response.text().await.unwrap_or_default();
        log::warn!("[shopee] Rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(ShopeeError::RateLimited {
            retry_after,
            message: truncate_for_log(&body),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ShopeeError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!("[shopee] Response Body: {}", truncate_for_log(&text));

    Ok((status, text))
}

/// 解码平台响应为目标类型
///
/// 1. body 无法解析为 JSON：2xx 视为解析失败，其余视为网关错误
/// 2. body 带非空 `error` 码：映射为对应的 [`ShopeeError`]（不论状态码）
/// 3. 非 2xx 且无业务错误码：按网关错误处理
/// 4. 其余情况反序列化为 `T`
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            if (200..300).contains(&status) {
                log::error!("[shopee] JSON parse failed: {e}");
                log::error!("[shopee] Raw response: {}", truncate_for_log(body));
                return Err(ShopeeError::ParseError {
                    detail: e.to_string(),
                });
            }
            return Err(ShopeeError::NetworkError {
                detail: format!("HTTP {status}: {}", truncate_for_log(body)),
            });
        }
    };

    // 成功响应里 error 通常是空串,只有非空才是业务错误
    if let Some(code) = value.get("error").and_then(|v| v.as_str())
        && !code.is_empty()
    {
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let request_id = value
            .get("request_id")
            .and_then(|v| v.as_str())
            .map(ToString::to_string);

        let error = map_api_error(code, message, request_id);
        if error.is_expected() {
            log::warn!("[shopee] API error: {error}");
        } else {
            log::error!("[shopee] API error: {error}");
        }
        return Err(error);
    }

    if !(200..300).contains(&status) {
        return Err(ShopeeError::NetworkError {
            detail: format!("HTTP {status}: {}", truncate_for_log(body)),
        });
    }

    serde_json::from_value(value).map_err(|e| ShopeeError::ParseError {
        detail: e.to_string(),
    })
}
