//! 合作方凭证配置

use serde::{Deserialize, Serialize};

/// 生产环境网关
pub const PRODUCTION_HOST: &str = "https://partner.shopeemobile.com";
/// 沙箱(测试)环境网关
pub const SANDBOX_HOST: &str = "https://partner.test-stable.shopeemobile.com";

/// Partner credentials and gateway location for one integrating application.
///
/// Immutable once constructed. Clients take it by [`std::sync::Arc`] so any
/// number of partner configurations can coexist in one process; nothing in
/// this crate holds configuration in process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopeeConfig {
    /// API gateway base URL, no trailing slash (see [`PRODUCTION_HOST`] /
    /// [`SANDBOX_HOST`]).
    pub host: String,
    /// Partner id issued by the open platform.
    pub partner_id: u64,
    /// Partner key used as the HMAC secret. Never logged by this crate.
    pub partner_key: String,
    /// Redirect URL registered for the shop authorization flow.
    pub redirect_url: String,
}

impl ShopeeConfig {
    /// 创建配置实例，host 末尾的 `/` 会被去掉
    #[must_use]
    pub fn new(host: String, partner_id: u64, partner_key: String, redirect_url: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            partner_id,
            partner_key,
            redirect_url,
        }
    }
}
