//! Order endpoints: listing, detail fan-out, cancellation and shipment pages.

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::client::ShopClient;
use crate::error::Result;

/// `order/get_order_detail` accepts at most this many order serials per call.
const ORDER_DETAIL_CHUNK: usize = 50;

/// Order endpoint caller bound to one shop.
#[derive(Clone)]
pub struct Order {
    client: ShopClient,
}

impl Order {
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// One page of order serials in a creation or update time window
    /// (`order/get_order_list`).
    pub async fn get_order_list(
        &self,
        params: &GetOrderListParams,
    ) -> Result<GetOrderListResponse> {
        self.client.get("order/get_order_list", params).await
    }

    /// Full detail for the given order serials (`order/get_order_detail`).
    ///
    /// The endpoint caps `order_sn_list` at 50 serials, so larger inputs are
    /// split into chunks fetched concurrently and the pages merged in input
    /// order. Serials unknown to the shop are silently absent from the result.
    pub async fn get_order_detail(&self, order_sn_list: &[String]) -> Result<Vec<OrderDetail>> {
        #[derive(Serialize)]
        struct Params {
            order_sn_list: String,
            response_optional_fields: &'static str,
        }

        let calls = order_sn_list.chunks(ORDER_DETAIL_CHUNK).map(|chunk| {
            let params = Params {
                order_sn_list: chunk.join(","),
                response_optional_fields: "item_list,recipient_address,total_amount,buyer_username",
            };
            async move {
                self.client
                    .get::<GetOrderDetailResponse, _>("order/get_order_detail", &params)
                    .await
            }
        });

        let mut orders = Vec::with_capacity(order_sn_list.len());
        for page in join_all(calls).await {
            if let Some(response) = page?.response {
                orders.extend(response.order_list);
            }
        }
        Ok(orders)
    }

    /// Cancel an order (`order/cancel_order`).
    pub async fn cancel_order(&self, params: &CancelOrderParams) -> Result<CancelOrderResponse> {
        self.client.post_json("order/cancel_order", params).await
    }

    /// One page of orders ready to ship (`order/get_shipment_list`).
    pub async fn get_shipment_list(
        &self,
        params: &GetShipmentListParams,
    ) -> Result<GetShipmentListResponse> {
        self.client.get("order/get_shipment_list", params).await
    }
}

/// Parameters of [`Order::get_order_list`].
#[derive(Debug, Clone, Serialize)]
pub struct GetOrderListParams {
    /// Which timestamp the window filters on: `create_time` or `update_time`.
    pub time_range_field: String,
    pub time_from: i64,
    pub time_to: i64,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_optional_fields: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderListResponse {
    pub response: Option<OrderListPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListPage {
    #[serde(default)]
    pub order_list: Vec<OrderListEntry>,
    pub more: Option<bool>,
    /// Cursor for the next page; empty when `more` is false.
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderListEntry {
    pub order_sn: String,
    pub order_status: Option<String>,
    pub booking_sn: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GetOrderDetailResponse {
    response: Option<OrderDetailPage>,
}

#[derive(Debug, Clone, Deserialize)]
struct OrderDetailPage {
    #[serde(default)]
    order_list: Vec<OrderDetail>,
}

/// One order as returned by `order/get_order_detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetail {
    pub order_sn: String,
    pub order_status: Option<String>,
    pub region: Option<String>,
    pub currency: Option<String>,
    pub total_amount: Option<f64>,
    pub create_time: Option<i64>,
    pub update_time: Option<i64>,
    pub buyer_user_id: Option<u64>,
    pub buyer_username: Option<String>,
    #[serde(default)]
    pub item_list: Vec<OrderItem>,
    pub recipient_address: Option<RecipientAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    pub item_id: u64,
    pub item_name: Option<String>,
    pub item_sku: Option<String>,
    pub model_id: Option<u64>,
    pub model_name: Option<String>,
    pub model_sku: Option<String>,
    pub model_quantity_purchased: Option<u32>,
    pub model_original_price: Option<f64>,
    pub model_discounted_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipientAddress {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub town: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub zipcode: Option<String>,
    pub full_address: Option<String>,
}

/// Parameters of [`Order::cancel_order`].
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderParams {
    pub order_sn: String,
    /// Platform cancel reason, e.g. `OUT_OF_STOCK`.
    pub cancel_reason: String,
    /// Required when the reason is `OUT_OF_STOCK`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list: Option<Vec<CancelOrderItem>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderItem {
    pub item_id: u64,
    pub model_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResponse {
    pub response: Option<CancelOrderResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResult {
    /// Unix seconds when the cancellation was registered.
    pub update_time: Option<i64>,
}

/// Parameters of [`Order::get_shipment_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetShipmentListParams {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetShipmentListResponse {
    pub response: Option<ShipmentListPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentListPage {
    #[serde(default)]
    pub order_list: Vec<ShipmentListEntry>,
    pub more: Option<bool>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentListEntry {
    pub order_sn: String,
    pub package_number: Option<String>,
}
