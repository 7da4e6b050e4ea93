//! Shop-level endpoint caller and the hub for the other shop-scoped surfaces.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::client::ShopClient;
use crate::error::Result;
use crate::resources::auth::SipAffiShop;
use crate::resources::{Logistics, Order, Product};

/// Shop profile endpoints plus accessors for the order, product and logistics
/// surfaces. All calls go through the wrapped [`ShopClient`] and therefore
/// share its token state and expired-token replay.
#[derive(Clone)]
pub struct Shop {
    client: ShopClient,
}

impl Shop {
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// The underlying shop-level client.
    #[must_use]
    pub fn client(&self) -> &ShopClient {
        &self.client
    }

    /// Order endpoints bound to the same shop and token state.
    #[must_use]
    pub fn order(&self) -> Order {
        Order::new(self.client.clone())
    }

    /// Product endpoints bound to the same shop and token state.
    #[must_use]
    pub fn product(&self) -> Product {
        Product::new(self.client.clone())
    }

    /// Logistics endpoints bound to the same shop and token state.
    #[must_use]
    pub fn logistics(&self) -> Logistics {
        Logistics::new(self.client.clone())
    }

    /// Basic shop information (`shop/get_shop_info`).
    pub async fn get_shop_info(&self) -> Result<ShopInfo> {
        self.client.get("shop/get_shop_info", &()).await
    }

    /// Shop display profile (`shop/get_profile`).
    pub async fn get_profile(&self) -> Result<ShopProfileResponse> {
        self.client.get("shop/get_profile", &()).await
    }

    /// Update the shop display profile (`shop/update_profile`). Only the
    /// fields set in `params` are sent.
    pub async fn update_profile(
        &self,
        params: &UpdateProfileParams,
    ) -> Result<ShopProfileResponse> {
        self.client.post_json("shop/update_profile", params).await
    }

    /// Upload an image to the shop media space
    /// (`media_space/upload_image`). Multipart uploads are never replayed
    /// after a token refresh; retry at the call site if needed.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadImageResponse> {
        let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name.to_string()));
        self.client.post_multipart("media_space/upload_image", form).await
    }
}

/// Shop information returned by `shop/get_shop_info`. Fields arrive at the
/// top level of the body, not under `response`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopInfo {
    pub shop_name: Option<String>,
    pub region: Option<String>,
    /// Platform shop status, e.g. `NORMAL`, `BANNED`, `FROZEN`.
    pub status: Option<String>,
    #[serde(default)]
    pub sip_affi_shops: Vec<SipAffiShop>,
    /// Whether this is a cross-border shop.
    pub is_cb: Option<bool>,
    /// Whether the shop belongs to a China seller center main account.
    pub is_cnsc: Option<bool>,
    pub auth_time: Option<i64>,
    pub expire_time: Option<i64>,
    pub request_id: Option<String>,
}

/// Envelope of `shop/get_profile` and `shop/update_profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopProfileResponse {
    pub response: Option<ShopProfile>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopProfile {
    pub shop_logo: Option<String>,
    pub description: Option<String>,
    pub shop_name: Option<String>,
}

/// Parameters of [`Shop::update_profile`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Envelope of `media_space/upload_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadImageResponse {
    pub response: Option<ImageInfoWrapper>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfoWrapper {
    pub image_info: Option<ImageInfo>,
}

/// Uploaded image id plus its per-region CDN URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub image_id: String,
    #[serde(default)]
    pub image_url_list: Vec<ImageUrl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUrl {
    pub image_url_region: Option<String>,
    pub image_url: Option<String>,
}
