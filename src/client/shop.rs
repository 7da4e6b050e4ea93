//! 店铺级（授权）请求管道
//!
//! 每个 [`ShopClient`] 绑定一家店铺：签名串里带上 access token 与 shop id。
//! 平台返回 `error_auth` 且配置了刷新回调时，刷新 token 并把原请求重放一次；
//! 重放用新 token、新时间戳重建整个签名 URL，旧请求的签名参数不会残留。
//! 并发请求共用同一个旧 token 失败时只触发一次刷新（见 [`ShopClient::refresh_token`]）。

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};

use crate::config::ShopeeConfig;
use crate::error::{Result, ShopeeError};
use crate::http;
use crate::sign;
use crate::utils::log_sanitizer::mask_token;

use super::{api_path, build_url, to_query_pairs};

/// Asynchronous access-token refresher injected into a [`ShopClient`].
///
/// Invoked with no arguments when the platform rejects the current token
/// (`error_auth`); must resolve the new access token, typically by calling
/// `auth/access_token/get` with a stored refresh token. A blanket impl covers
/// plain async closures:
///
/// ```no_run
/// use shopee_openapi::{AccessTokenRefresher, ShopeeError};
///
/// fn refresher() -> impl AccessTokenRefresher {
///     || async { Ok::<_, ShopeeError>("new-token".to_string()) }
/// }
/// ```
#[async_trait]
pub trait AccessTokenRefresher: Send + Sync {
    /// Exchange the stored refresh token (or equivalent) for a new access token.
    async fn refresh_access_token(&self) -> Result<String>;
}

#[async_trait]
impl<F, Fut> AccessTokenRefresher for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String>> + Send,
{
    async fn refresh_access_token(&self) -> Result<String> {
        self().await
    }
}

/// 当前 token 与其代数；代数随每次刷新递增，用于识别"我拿的还是旧 token 吗"
struct TokenState {
    access_token: String,
    generation: u64,
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Shop-authorized request pipeline.
///
/// Built per (shop id, access token) pair via [`ShopClient::builder`]. Signs
/// every request with the partner credentials plus the shop's current access
/// token; the token is shared mutable state so a refresh propagates to every
/// request signed afterwards, including ones issued through clones of this
/// client. Activating a different shop means building a new client.
#[derive(Clone)]
pub struct ShopClient {
    client: Client,
    config: Arc<ShopeeConfig>,
    shop_id: u64,
    token: Arc<RwLock<TokenState>>,
    refresh_gate: Arc<Mutex<()>>,
    refresher: Option<Arc<dyn AccessTokenRefresher>>,
}

/// [`ShopClient`] builder.
pub struct ShopClientBuilder {
    config: Arc<ShopeeConfig>,
    shop_id: u64,
    access_token: String,
    refresher: Option<Arc<dyn AccessTokenRefresher>>,
}

impl ShopClientBuilder {
    fn new(config: Arc<ShopeeConfig>, shop_id: u64, access_token: String) -> Self {
        Self {
            config,
            shop_id,
            access_token,
            refresher: None,
        }
    }

    /// 注入 token 刷新回调；不配置则 `error_auth` 原样抛给调用方
    pub fn refresher(mut self, refresher: impl AccessTokenRefresher + 'static) -> Self {
        self.refresher = Some(Arc::new(refresher));
        self
    }

    pub fn build(self) -> ShopClient {
        ShopClient {
            client: http::create_http_client(),
            config: self.config,
            shop_id: self.shop_id,
            token: Arc::new(RwLock::new(TokenState {
                access_token: self.access_token,
                generation: 0,
            })),
            refresh_gate: Arc::new(Mutex::new(())),
            refresher: self.refresher,
        }
    }
}

impl ShopClient {
    /// 创建不带刷新回调的店铺客户端
    pub fn new(config: Arc<ShopeeConfig>, shop_id: u64, access_token: String) -> Self {
        Self::builder(config, shop_id, access_token).build()
    }

    pub fn builder(
        config: Arc<ShopeeConfig>,
        shop_id: u64,
        access_token: String,
    ) -> ShopClientBuilder {
        ShopClientBuilder::new(config, shop_id, access_token)
    }

    /// Shop id this client is bound to.
    #[must_use]
    pub fn shop_id(&self) -> u64 {
        self.shop_id
    }

    /// Partner configuration this client signs with.
    #[must_use]
    pub fn config(&self) -> &ShopeeConfig {
        &self.config
    }

    /// Current access token. Changes after a successful refresh.
    pub async fn access_token(&self) -> String {
        self.token.read().await.access_token.clone()
    }

    /// 当前 token 快照：值与代数一起取，供失败后识别并发刷新
    async fn token_snapshot(&self) -> (String, u64) {
        let state = self.token.read().await;
        (state.access_token.clone(), state.generation)
    }

    /// 构造店铺级签名 URL；每次调用都取新时间戳、算新签名
    fn signed_url(&self, path: &str, params: &[(String, String)], access_token: &str) -> String {
        let api_path = api_path(path);
        let signed = sign::build_signed_query(
            &api_path,
            self.config.partner_id,
            &self.config.partner_key,
            Some(access_token),
            Some(self.shop_id),
        );
        build_url(&self.config.host, &signed, params)
    }

    /// Issue a shop-level GET. `params` are appended after the signed portion
    /// of the query and never contribute to the signature.
    pub async fn get<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let pairs = to_query_pairs(params)?;
        self.dispatch(Verb::Get, path, &pairs, None).await
    }

    /// Issue a shop-level POST with a JSON body.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| ShopeeError::SerializationError {
                detail: e.to_string(),
            })?;
        self.dispatch(Verb::Post, path, &[], Some(payload)).await
    }

    /// 多部分表单上传（图片等）
    ///
    /// 表单流无法重建，token 失效时不重放，错误原样抛出。
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let (token, _) = self.token_snapshot().await;
        let url = self.signed_url(path, &[], &token);
        let request = self.client.post(&url).multipart(form);
        let (status, body) = http::execute(request, "POST", path).await?;
        http::decode_body(status, &body)
    }

    /// 发送一次：签名、执行、解码
    async fn send_once<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        params: &[(String, String)],
        json_body: Option<&str>,
        access_token: &str,
    ) -> Result<T> {
        let url = self.signed_url(path, params, access_token);
        let request = match verb {
            Verb::Get => self.client.get(&url),
            Verb::Post => self
                .client
                .post(&url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json_body.unwrap_or_default().to_string()),
        };
        let (status, body) = http::execute(request, verb.as_str(), path).await?;
        http::decode_body(status, &body)
    }

    /// 请求调度：一次发送，token 失效时刷新并重放一次
    ///
    /// 状态机：Sent → (error_auth 且有刷新回调) → Refreshed-Replay。
    /// 重放的结果不论成败原样返回，绝不二次重试；
    /// 其它错误（网络、超时、业务错误）不进入该路径。
    async fn dispatch<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        params: &[(String, String)],
        json_body: Option<String>,
    ) -> Result<T> {
        let (token, generation) = self.token_snapshot().await;
        match self
            .send_once(verb, path, params, json_body.as_deref(), &token)
            .await
        {
            Err(error) if error.is_auth_expired() => {
                let Some(refresher) = &self.refresher else {
                    return Err(error);
                };
                log::warn!(
                    "[shopee] token {} rejected for shop {}, refreshing and replaying once",
                    mask_token(&token),
                    self.shop_id
                );
                let fresh = self
                    .refresh_token(refresher.as_ref(), generation)
                    .await?;
                self.send_once(verb, path, params, json_body.as_deref(), &fresh)
                    .await
            }
            other => other,
        }
    }

    /// 刷新 access token，并合并并发刷新
    ///
    /// 拿到 gate 后先复查代数：已经被别的请求刷新过就直接复用新 token，
    /// 只有确认自己用的就是当前代的 token 才触发回调。这样 N 个并发请求
    /// 用同一个过期 token 失败时回调只执行一次，慢的旧刷新也不会覆盖新 token。
    async fn refresh_token(
        &self,
        refresher: &dyn AccessTokenRefresher,
        failed_generation: u64,
    ) -> Result<String> {
        let _gate = self.refresh_gate.lock().await;

        {
            let state = self.token.read().await;
            if state.generation != failed_generation {
                log::debug!(
                    "[shopee] token already refreshed by a concurrent request (shop {}, generation {})",
                    self.shop_id,
                    state.generation
                );
                return Ok(state.access_token.clone());
            }
        }

        let new_token = refresher
            .refresh_access_token()
            .await
            .map_err(|e| ShopeeError::RefreshFailed {
                detail: e.to_string(),
            })?;
        if new_token.is_empty() {
            return Err(ShopeeError::RefreshFailed {
                detail: "refresher returned an empty access token".to_string(),
            });
        }

        let mut state = self.token.write().await;
        state.access_token = new_token.clone();
        state.generation += 1;
        log::info!(
            "[shopee] access token refreshed (shop {}, token {})",
            self.shop_id,
            mask_token(&new_token)
        );
        Ok(new_token)
    }
}
