//! Shopee 开放平台 v2 签名与签名查询串构造
//!
//! 远端按同样的规则重新计算签名,任何字段顺序或占位差异都会导致校验失败。

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// 计算签名: 将 `parts` 按调用顺序无分隔符拼接,对结果做 HMAC-SHA256,输出小写 hex
///
/// 纯函数,对任意合法输入都不会失败(HMAC 接受任意长度密钥)。
pub fn sign(partner_key: &str, parts: &[&str]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(partner_key.as_bytes()).expect("HMAC can take key of any size");
    for part in parts {
        mac.update(part.as_bytes());
    }
    hex::encode(mac.finalize().into_bytes())
}

/// 构造签名查询串,时间戳取当前 unix 秒
///
/// 返回 `"{api_path}?partner_id=..&timestamp=..&sign=..[&access_token=..][&shop_id=..]"`。
/// `api_path` 必须是含 `/api/v2` 命名空间的完整路径,不含查询串。
pub fn build_signed_query(
    api_path: &str,
    partner_id: u64,
    partner_key: &str,
    access_token: Option<&str>,
    shop_id: Option<u64>,
) -> String {
    build_signed_query_at(
        api_path,
        partner_id,
        partner_key,
        access_token,
        shop_id,
        Utc::now().timestamp(),
    )
}

/// [`build_signed_query`] 的固定时间戳版本
pub fn build_signed_query_at(
    api_path: &str,
    partner_id: u64,
    partner_key: &str,
    access_token: Option<&str>,
    shop_id: Option<u64>,
    timestamp: i64,
) -> String {
    let partner_id_str = partner_id.to_string();
    let timestamp_str = timestamp.to_string();
    let shop_id_str = shop_id.map(|id| id.to_string()).unwrap_or_default();

    // 签名基串: partner_id + api_path + timestamp + access_token + shop_id,无分隔符。
    // token/shop 缺席时必须以空串占位,否则与远端校验方的拼接结果不一致。
    let signature = sign(
        partner_key,
        &[
            &partner_id_str,
            api_path,
            &timestamp_str,
            access_token.unwrap_or_default(),
            &shop_id_str,
        ],
    );

    let mut pairs = vec![
        format!("partner_id={partner_id_str}"),
        format!("timestamp={timestamp_str}"),
        format!("sign={signature}"),
    ];
    if let Some(token) = access_token {
        pairs.push(format!("access_token={}", urlencoding::encode(token)));
    }
    if let Some(id) = shop_id {
        pairs.push(format!("shop_id={id}"));
    }

    format!("{}?{}", api_path, pairs.join("&"))
}
