//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use shopee_openapi::{
    AccessTokenRefresher, SANDBOX_HOST, ShopClient, ShopeeConfig, ShopeeError,
};

pub const PARTNER_ID: u64 = 1001;
pub const PARTNER_KEY: &str = "secret";
pub const SHOP_ID: u64 = 55;

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

/// 指向 mock 服务器的 partner 配置
pub fn test_config(host: &str) -> Arc<ShopeeConfig> {
    Arc::new(ShopeeConfig::new(
        host.to_string(),
        PARTNER_ID,
        PARTNER_KEY.to_string(),
        "https://example.com/callback".to_string(),
    ))
}

/// 不带刷新回调的店铺客户端
pub fn shop_client(host: &str, access_token: &str) -> ShopClient {
    ShopClient::new(test_config(host), SHOP_ID, access_token.to_string())
}

/// 计数刷新器：每次调用计数 +1，返回固定的新 token
pub fn counting_refresher(
    new_token: String,
) -> (Arc<AtomicUsize>, impl AccessTokenRefresher + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let refresher = move || {
        let counter = counter.clone();
        let token = new_token.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<String, ShopeeError>(token)
        }
    };
    (calls, refresher)
}

/// 总是失败的刷新器
pub fn failing_refresher(detail: String) -> impl AccessTokenRefresher + 'static {
    move || {
        let detail = detail.clone();
        async move {
            Err::<String, ShopeeError>(ShopeeError::NetworkError { detail })
        }
    }
}

/// 平台 token 失效响应体（HTTP 200 也会携带该 error 字段）
pub fn auth_expired_body() -> String {
    r#"{"error":"error_auth","message":"Invalid access_token.","request_id":"req-auth-1"}"#
        .to_string()
}

/// 沙箱实盘凭证（缺失任一环境变量则返回 `None`）
pub struct LiveContext {
    pub config: Arc<ShopeeConfig>,
    pub shop_id: u64,
    pub access_token: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let partner_id = env::var("SHOPEE_PARTNER_ID").ok()?.parse().ok()?;
        let partner_key = env::var("SHOPEE_PARTNER_KEY").ok()?;
        let shop_id = env::var("SHOPEE_SHOP_ID").ok()?.parse().ok()?;
        let access_token = env::var("SHOPEE_ACCESS_TOKEN").ok()?;
        let host = env::var("SHOPEE_HOST").unwrap_or_else(|_| SANDBOX_HOST.to_string());

        Some(Self {
            config: Arc::new(ShopeeConfig::new(
                host,
                partner_id,
                partner_key,
                "https://example.com/callback".to_string(),
            )),
            shop_id,
            access_token,
        })
    }

    pub fn shop_client(&self) -> ShopClient {
        ShopClient::new(self.config.clone(), self.shop_id, self.access_token.clone())
    }
}
