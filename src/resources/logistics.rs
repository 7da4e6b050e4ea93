//! Logistics endpoints: channels, shipping parameters and ship operations.

use serde::{Deserialize, Serialize};

use crate::client::ShopClient;
use crate::error::Result;

/// Logistics endpoint caller bound to one shop.
#[derive(Clone)]
pub struct Logistics {
    client: ShopClient,
}

impl Logistics {
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// Logistics channels enabled for the shop's region
    /// (`logistics/get_channel_list`).
    pub async fn get_channel_list(&self) -> Result<ChannelListResponse> {
        self.client.get("logistics/get_channel_list", &()).await
    }

    /// What `ship_order` will need for this order: pickup slots, drop-off
    /// branches or a plain tracking number
    /// (`logistics/get_shipping_parameter`).
    pub async fn get_shipping_parameter(
        &self,
        order_sn: &str,
    ) -> Result<ShippingParameterResponse> {
        #[derive(Serialize)]
        struct Params<'a> {
            order_sn: &'a str,
        }
        self.client
            .get("logistics/get_shipping_parameter", &Params { order_sn })
            .await
    }

    /// Arrange shipment for one order (`logistics/ship_order`). Exactly one
    /// of `pickup`, `dropoff` or `non_integrated` must be set, per what
    /// [`Logistics::get_shipping_parameter`] reported under `info_needed`.
    pub async fn ship_order(&self, params: &ShipOrderParams) -> Result<ShipOrderResponse> {
        self.client.post_json("logistics/ship_order", params).await
    }

    /// Amend pickup details of an already arranged shipment
    /// (`logistics/update_shipping_order`).
    pub async fn update_shipping_order(
        &self,
        params: &UpdateShippingOrderParams,
    ) -> Result<ShipOrderResponse> {
        self.client
            .post_json("logistics/update_shipping_order", params)
            .await
    }

    /// Arrange shipment for up to 50 orders in one call
    /// (`logistics/batch_ship_order`). Per-order failures come back in
    /// `result_list` rather than failing the whole call.
    pub async fn batch_ship_order(
        &self,
        params: &BatchShipOrderParams,
    ) -> Result<BatchShipOrderResponse> {
        self.client.post_json("logistics/batch_ship_order", params).await
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListResponse {
    pub response: Option<ChannelListPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListPage {
    #[serde(default)]
    pub logistics_channel_list: Vec<LogisticsChannel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticsChannel {
    pub logistics_channel_id: u64,
    pub logistics_channel_name: Option<String>,
    pub enabled: Option<bool>,
    pub cod_enabled: Option<bool>,
    /// Parent channel id for sub-channels sharing one mask, if any.
    pub mask_channel_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShippingParameterResponse {
    pub response: Option<ShippingParameter>,
    pub request_id: Option<String>,
}

/// What the platform needs to arrange shipment for one order.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingParameter {
    pub info_needed: Option<InfoNeeded>,
    pub pickup: Option<PickupInfo>,
    pub dropoff: Option<DropoffInfo>,
}

/// Which `ship_order` branches apply; each list names the required fields of
/// that branch.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoNeeded {
    #[serde(default)]
    pub pickup: Vec<String>,
    #[serde(default)]
    pub dropoff: Vec<String>,
    #[serde(default)]
    pub non_integrated: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickupInfo {
    #[serde(default)]
    pub address_list: Vec<PickupAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickupAddress {
    pub address_id: u64,
    pub address: Option<String>,
    #[serde(default)]
    pub time_slot_list: Vec<PickupTimeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickupTimeSlot {
    pub pickup_time_id: String,
    /// Unix seconds of the slot's day.
    pub date: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DropoffInfo {
    #[serde(default)]
    pub branch_list: Vec<DropoffBranch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DropoffBranch {
    pub branch_id: u64,
    pub region: Option<String>,
    pub address: Option<String>,
}

/// Parameters of [`Logistics::ship_order`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShipOrderParams {
    pub order_sn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<PickupParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<DropoffParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_integrated: Option<NonIntegratedParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PickupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DropoffParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NonIntegratedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipOrderResponse {
    pub request_id: Option<String>,
}

/// Parameters of [`Logistics::update_shipping_order`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShippingOrderParams {
    pub order_sn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<PickupParams>,
}

/// Parameters of [`Logistics::batch_ship_order`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchShipOrderParams {
    pub order_list: Vec<BatchShipOrderEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<PickupParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<DropoffParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_integrated: Option<NonIntegratedParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchShipOrderEntry {
    pub order_sn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchShipOrderResponse {
    pub response: Option<BatchShipResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchShipResult {
    #[serde(default)]
    pub result_list: Vec<BatchShipResultEntry>,
}

/// Per-order outcome of a batch ship call; `fail_error` is unset on success.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchShipResultEntry {
    pub order_sn: String,
    pub fail_error: Option<String>,
    pub fail_message: Option<String>,
}
