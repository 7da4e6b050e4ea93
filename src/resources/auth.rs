//! OAuth bootstrap surface (partner-level).
//!
//! Authorization links open in the seller's browser; the shop authorizes the
//! partner and the platform redirects back with a one-time `code`, which
//! [`Auth::get_access_token`] exchanges for the first token pair.

use serde::{Deserialize, Serialize};

use crate::client::{PartnerClient, api_path};
use crate::error::Result;
use crate::sign;

/// Partner-level endpoint caller: authorization links, token exchange and the
/// partner's authorized-shop listing.
#[derive(Clone)]
pub struct Auth {
    client: PartnerClient,
}

impl Auth {
    #[must_use]
    pub fn new(client: PartnerClient) -> Self {
        Self { client }
    }

    /// Signed browser link that starts the shop authorization flow.
    ///
    /// The registered redirect URL is appended percent-encoded; it is not part
    /// of the signature.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        self.signed_link("shop/auth_partner")
    }

    /// Signed browser link that starts the shop de-authorization flow.
    #[must_use]
    pub fn cancel_authorization_url(&self) -> String {
        self.signed_link("shop/cancel_auth_partner")
    }

    fn signed_link(&self, path: &str) -> String {
        let config = self.client.config();
        let query = sign::build_signed_query(
            &api_path(path),
            config.partner_id,
            &config.partner_key,
            None,
            None,
        );
        format!(
            "{}{}&redirect={}",
            config.host,
            query,
            urlencoding::encode(&config.redirect_url)
        )
    }

    /// Exchange the authorization `code` for the shop's first token pair
    /// (`auth/token/get`).
    pub async fn get_access_token(&self, code: &str, shop_id: u64) -> Result<AccessTokenResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            code: &'a str,
            shop_id: u64,
            partner_id: u64,
        }
        self.client
            .post_json(
                "auth/token/get",
                &Body {
                    code,
                    shop_id,
                    partner_id: self.client.config().partner_id,
                },
            )
            .await
    }

    /// Trade a refresh token for a fresh access token
    /// (`auth/access_token/get`). This is what a
    /// [`crate::AccessTokenRefresher`] implementation typically calls.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        shop_id: u64,
    ) -> Result<RefreshTokenResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            refresh_token: &'a str,
            shop_id: u64,
            partner_id: u64,
        }
        self.client
            .post_json(
                "auth/access_token/get",
                &Body {
                    refresh_token,
                    shop_id,
                    partner_id: self.client.config().partner_id,
                },
            )
            .await
    }

    /// Page through the shops currently authorized to this partner
    /// (`public/get_shops_by_partner`).
    pub async fn get_shops_by_partner(
        &self,
        params: &ShopsByPartnerParams,
    ) -> Result<ShopsByPartnerResponse> {
        self.client.get("public/get_shops_by_partner", params).await
    }
}

/// Parameters of [`Auth::get_shops_by_partner`].
#[derive(Debug, Clone, Serialize)]
pub struct ShopsByPartnerParams {
    pub page_size: u32,
    pub page_no: u32,
}

/// Token pair returned by `auth/token/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expire_in: i64,
    /// Shops covered by a main-account authorization, if any.
    #[serde(default)]
    pub shop_id_list: Vec<u64>,
    #[serde(default)]
    pub merchant_id_list: Vec<u64>,
    pub request_id: Option<String>,
}

/// Token pair returned by `auth/access_token/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expire_in: i64,
    pub shop_id: Option<u64>,
    pub merchant_id: Option<u64>,
    pub request_id: Option<String>,
}

/// One page of the partner's authorized shops.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopsByPartnerResponse {
    #[serde(default)]
    pub authed_shop_list: Vec<AuthedShop>,
    pub more: Option<bool>,
    pub request_id: Option<String>,
}

/// An authorized shop as listed by `public/get_shops_by_partner`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthedShop {
    pub shop_id: u64,
    pub region: Option<String>,
    /// Unix seconds when the authorization was granted.
    pub auth_time: Option<i64>,
    /// Unix seconds when the authorization expires.
    pub expire_time: Option<i64>,
    #[serde(default)]
    pub sip_affi_shop_list: Vec<SipAffiShop>,
}

/// Affiliate shop bound to a SIP (single integrated platform) primary shop.
#[derive(Debug, Clone, Deserialize)]
pub struct SipAffiShop {
    pub affi_shop_id: u64,
    pub region: Option<String>,
}
