//! 请求管道
//!
//! 两种管道共用一套路径改写规则：调用方只给出相对路径（如 `shop/get_shop_info`），
//! 这里补全 `/api/v2` 命名空间、生成签名查询串，再把调用方自己的查询参数追加在
//! 签名参数之后。调用方参数不参与签名。

mod shop;

pub use shop::{AccessTokenRefresher, ShopClient, ShopClientBuilder};

use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ShopeeConfig;
use crate::error::{Result, ShopeeError};
use crate::http;
use crate::sign;

/// API 命名空间，所有相对路径都挂在它下面
pub(crate) const API_BASE_PATH: &str = "/api/v2";

/// 把相对路径补全为带命名空间的完整 API 路径
pub(crate) fn api_path(path: &str) -> String {
    format!("{API_BASE_PATH}/{}", path.trim_start_matches('/'))
}

/// 拼接完整 URL：host + 签名查询串 + 调用方参数
pub(crate) fn build_url(host: &str, signed_query: &str, params: &[(String, String)]) -> String {
    let mut url = format!("{host}{signed_query}");
    if !params.is_empty() {
        let extra = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('&');
        url.push_str(&extra);
    }
    url
}

/// 把参数结构体打平为查询键值对
///
/// `None` 字段跳过，数组展开为重复键（`item_status=A&item_status=B`），
/// 嵌套结构体不是合法的查询参数。键按字典序输出。
pub(crate) fn to_query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(|e| ShopeeError::SerializationError {
        detail: e.to_string(),
    })?;

    let map = match value {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Object(map) => map,
        other => {
            return Err(ShopeeError::SerializationError {
                detail: format!("query params must serialize to an object, got: {other}"),
            });
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar_to_string(&key, &item)?));
                }
            }
            scalar => pairs.push((key.clone(), scalar_to_string(&key, &scalar)?)),
        }
    }
    Ok(pairs)
}

fn scalar_to_string(key: &str, value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(ShopeeError::SerializationError {
            detail: format!("query param '{key}' must be a scalar, got: {other}"),
        }),
    }
}

/// Partner-level request pipeline.
///
/// Signs every request with partner id/key only (no token, no shop id). Used
/// for the OAuth bootstrap surface: authorization links, token exchange and
/// the partner's shop listing. Cheap to clone; all clones share one HTTP
/// connection pool and the same immutable [`ShopeeConfig`].
#[derive(Clone)]
pub struct PartnerClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<ShopeeConfig>,
}

impl PartnerClient {
    /// 创建合作方级客户端
    #[must_use]
    pub fn new(config: Arc<ShopeeConfig>) -> Self {
        Self {
            client: http::create_http_client(),
            config,
        }
    }

    /// Partner configuration this client signs with.
    #[must_use]
    pub fn config(&self) -> &ShopeeConfig {
        &self.config
    }

    /// 构造合作方级签名 URL（无 token/shop）并追加调用方参数
    fn signed_url(&self, path: &str, params: &[(String, String)]) -> String {
        let api_path = api_path(path);
        let signed = sign::build_signed_query(
            &api_path,
            self.config.partner_id,
            &self.config.partner_key,
            None,
            None,
        );
        build_url(&self.config.host, &signed, params)
    }

    /// Issue a partner-level GET. `params` are appended after the signed
    /// portion of the query and never contribute to the signature.
    pub async fn get<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let pairs = to_query_pairs(params)?;
        let url = self.signed_url(path, &pairs);
        let (status, body) = http::execute(self.client.get(&url), "GET", path).await?;
        http::decode_body(status, &body)
    }

    /// Issue a partner-level POST with a JSON body.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| ShopeeError::SerializationError {
                detail: e.to_string(),
            })?;
        let url = self.signed_url(path, &[]);
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let (status, body) = http::execute(request, "POST", path).await?;
        http::decode_body(status, &body)
    }
}
