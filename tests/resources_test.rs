//! 资源端点集成测试：参数编组、分块扇出、请求体形状与响应解析
//!
//! 运行方式:
//! ```bash
//! cargo test --test resources_test
//! ```

mod common;

use common::{shop_client, test_config};
use mockito::Matcher;
use shopee_openapi::resources::logistics::{PickupParams, ShipOrderParams};
use shopee_openapi::resources::product::{
    GetItemListParams, InitTierVariationParams, ItemStatus, ModelParams, PriceUpdate,
    TierVariationOptionParams, TierVariationParams,
};
use shopee_openapi::{Auth, PartnerClient, Shop};

// ============ Auth ============

#[tokio::test]
async fn get_access_token_posts_code_and_partner_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/auth/token/get")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "code": "code-from-redirect",
            "shop_id": 55,
            "partner_id": 1001
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"tok-A","refresh_token":"ref-A","expire_in":14400,"request_id":"req-t1"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let auth = Auth::new(PartnerClient::new(test_config(&server.url())));
    let tokens = auth
        .get_access_token("code-from-redirect", 55)
        .await
        .expect("token exchange should succeed");

    mock.assert_async().await;
    assert_eq!(tokens.access_token, "tok-A");
    assert_eq!(tokens.refresh_token, "ref-A");
    assert_eq!(tokens.expire_in, 14_400);
    assert!(tokens.shop_id_list.is_empty());
}

#[tokio::test]
async fn refresh_access_token_posts_the_refresh_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/auth/access_token/get")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "refresh_token": "ref-A",
            "shop_id": 55,
            "partner_id": 1001
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"tok-B","refresh_token":"ref-B","expire_in":14400,"shop_id":55,"request_id":"req-t2"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let auth = Auth::new(PartnerClient::new(test_config(&server.url())));
    let tokens = auth
        .refresh_access_token("ref-A", 55)
        .await
        .expect("refresh should succeed");

    mock.assert_async().await;
    assert_eq!(tokens.access_token, "tok-B");
    assert_eq!(tokens.shop_id, Some(55));
}

// ============ Order ============

#[tokio::test]
async fn order_detail_joins_serials_with_commas() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/order/get_order_detail")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("order_sn_list".to_string(), "sn-1,sn-2,sn-3".to_string()),
            Matcher::UrlEncoded("access_token".to_string(), "tok-A".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"order_list":[
                {"order_sn":"sn-1","order_status":"COMPLETED"},
                {"order_sn":"sn-2","order_status":"COMPLETED"},
                {"order_sn":"sn-3","order_status":"READY_TO_SHIP"}
            ]},"request_id":"req-o1"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let sns: Vec<String> = (1..=3).map(|i| format!("sn-{i}")).collect();
    let orders = shop
        .order()
        .get_order_detail(&sns)
        .await
        .expect("detail should succeed");

    mock.assert_async().await;
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].order_sn, "sn-1");
    assert_eq!(orders[2].order_status.as_deref(), Some("READY_TO_SHIP"));
}

#[tokio::test]
async fn order_detail_chunks_at_fifty_serials() {
    let mut server = mockito::Server::new_async().await;
    // 60 个单号过上限，必须拆成两次调用
    let mock = server
        .mock("GET", "/api/v2/order/get_order_detail")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":{"order_list":[{"order_sn":"sn-x"}]},"request_id":"req-o2"}"#)
        .expect(2)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let sns: Vec<String> = (1..=60).map(|i| format!("sn-{i}")).collect();
    let orders = shop
        .order()
        .get_order_detail(&sns)
        .await
        .expect("chunked detail should succeed");

    mock.assert_async().await;
    assert_eq!(orders.len(), 2, "one merged entry per chunk response");
}

// ============ Product ============

#[tokio::test]
async fn item_list_repeats_the_status_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/product/get_item_list")
        .match_query(Matcher::Regex(
            "item_status=NORMAL&item_status=UNLIST".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"item":[{"item_id":101,"item_status":"NORMAL","update_time":1700000000}],
                "total_count":1,"has_next_page":false},"request_id":"req-p1"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let page = shop
        .product()
        .get_item_list(&GetItemListParams {
            offset: 0,
            page_size: 40,
            update_time_from: None,
            update_time_to: None,
            item_status: vec![ItemStatus::Normal, ItemStatus::Unlist],
        })
        .await
        .expect("item list should succeed");

    mock.assert_async().await;
    let items = page.response.expect("response payload expected");
    assert_eq!(items.item[0].item_id, 101);
    assert_eq!(items.item[0].item_status, Some(ItemStatus::Normal));
}

#[tokio::test]
async fn item_base_info_joins_ids_and_sends_flags() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/product/get_item_base_info")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("item_id_list".to_string(), "11,22".to_string()),
            Matcher::UrlEncoded("need_tax_info".to_string(), "false".to_string()),
            Matcher::UrlEncoded("need_complaint_policy".to_string(), "false".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"item_list":[
                {"item_id":11,"item_name":"BT Speaker","item_status":"NORMAL",
                 "price_info":[{"currency":"SGD","original_price":49.9,"current_price":39.9}]},
                {"item_id":22,"item_name":"BT Earphones","item_status":"UNLIST"}
            ]},"request_id":"req-p2"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let info = shop
        .product()
        .get_item_base_info(&[11, 22], false, false)
        .await
        .expect("base info should succeed");

    mock.assert_async().await;
    let items = info.response.expect("response payload expected").item_list;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price_info[0].current_price, Some(39.9));
    assert_eq!(items[1].item_status, Some(ItemStatus::Unlist));
}

#[tokio::test]
async fn update_price_wraps_the_list_with_item_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/product/update_price")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "item_id": 7,
            "price_list": [
                {"model_id": 3, "original_price": 19.9},
                {"original_price": 12.5}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"success_list":[{"model_id":3,"original_price":19.9}],
                "failure_list":[{"model_id":0,"failed_reason":"price too low"}]},"request_id":"req-p3"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let result = shop
        .product()
        .update_price(
            7,
            &[
                PriceUpdate { model_id: Some(3), original_price: 19.9 },
                PriceUpdate { model_id: None, original_price: 12.5 },
            ],
        )
        .await
        .expect("update price should succeed");

    mock.assert_async().await;
    let outcome = result.response.expect("response payload expected");
    assert_eq!(outcome.success_list.len(), 1);
    assert_eq!(
        outcome.failure_list[0].failed_reason.as_deref(),
        Some("price too low")
    );
}

#[tokio::test]
async fn init_tier_variation_sends_tiers_and_models() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/product/init_tier_variation")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "item_id": 7,
            "tier_variation": [
                {"name": "Colour", "option_list": [{"option": "Black"}, {"option": "White"}]}
            ],
            "model": [
                {"tier_index": [0], "normal_stock": 10, "original_price": 19.9},
                {"tier_index": [1], "normal_stock": 5, "original_price": 19.9}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"model":[{"model_id":31,"tier_index":[0]},{"model_id":32,"tier_index":[1]}]},
                "request_id":"req-p4"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let result = shop
        .product()
        .init_tier_variation(&InitTierVariationParams {
            item_id: 7,
            tier_variation: vec![TierVariationParams {
                name: "Colour".to_string(),
                option_list: vec![
                    TierVariationOptionParams { option: "Black".to_string() },
                    TierVariationOptionParams { option: "White".to_string() },
                ],
            }],
            model: vec![
                ModelParams {
                    tier_index: vec![0],
                    normal_stock: Some(10),
                    original_price: Some(19.9),
                    model_sku: None,
                },
                ModelParams {
                    tier_index: vec![1],
                    normal_stock: Some(5),
                    original_price: Some(19.9),
                    model_sku: None,
                },
            ],
        })
        .await
        .expect("init tier variation should succeed");

    mock.assert_async().await;
    let models = result.response.expect("response payload expected").model;
    assert_eq!(models.len(), 2);
    assert_eq!(models[1].model_id, 32);
}

// ============ Logistics ============

#[tokio::test]
async fn shipping_parameter_passes_the_order_sn() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/logistics/get_shipping_parameter")
        .match_query(Matcher::UrlEncoded(
            "order_sn".to_string(),
            "2208OABC".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"info_needed":{"pickup":["address_id","pickup_time_id"]},
                "pickup":{"address_list":[{"address_id":126,"address":"1 Science Park",
                "time_slot_list":[{"pickup_time_id":"slot-1","date":1700000000}]}]}},
                "request_id":"req-l1"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let parameter = shop
        .logistics()
        .get_shipping_parameter("2208OABC")
        .await
        .expect("shipping parameter should succeed");

    mock.assert_async().await;
    let response = parameter.response.expect("response payload expected");
    assert_eq!(
        response.info_needed.unwrap().pickup,
        ["address_id", "pickup_time_id"]
    );
    let addresses = response.pickup.unwrap().address_list;
    assert_eq!(addresses[0].address_id, 126);
    assert_eq!(addresses[0].time_slot_list[0].pickup_time_id, "slot-1");
}

#[tokio::test]
async fn ship_order_sends_only_the_chosen_branch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/logistics/ship_order")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "order_sn": "2208OABC",
            "pickup": {"address_id": 126, "pickup_time_id": "slot-1"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"request_id":"req-l2"}"#)
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    shop.logistics()
        .ship_order(&ShipOrderParams {
            order_sn: "2208OABC".to_string(),
            pickup: Some(PickupParams {
                address_id: Some(126),
                pickup_time_id: Some("slot-1".to_string()),
            }),
            ..Default::default()
        })
        .await
        .expect("ship order should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn channel_list_parses_channels() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/logistics/get_channel_list")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"logistics_channel_list":[
                {"logistics_channel_id":90003,"logistics_channel_name":"Standard Delivery",
                 "enabled":true,"cod_enabled":true}
            ]},"request_id":"req-l3"}"#,
        )
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let channels = shop
        .logistics()
        .get_channel_list()
        .await
        .expect("channel list should succeed");

    let list = channels
        .response
        .expect("response payload expected")
        .logistics_channel_list;
    assert_eq!(list[0].logistics_channel_id, 90_003);
    assert_eq!(list[0].enabled, Some(true));
}

// ============ 图片上传 ============

#[tokio::test]
async fn upload_image_posts_a_multipart_form() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/media_space/upload_image")
        .match_query(Matcher::Any)
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"response":{"image_info":{"image_id":"img-1","image_url_list":[
                {"image_url_region":"SG","image_url":"https://cf.example/img-1"}
            ]}},"request_id":"req-m1"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shop = Shop::new(shop_client(&server.url(), "tok-A"));
    let uploaded = shop
        .upload_image("logo.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .expect("upload should succeed");

    mock.assert_async().await;
    let info = uploaded
        .response
        .and_then(|r| r.image_info)
        .expect("image info expected");
    assert_eq!(info.image_id, "img-1");
    assert_eq!(info.image_url_list[0].image_url_region.as_deref(), Some("SG"));
}
