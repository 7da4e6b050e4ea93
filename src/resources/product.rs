//! Product endpoints: catalog metadata, item CRUD, price/stock updates and
//! tier variations.

use serde::{Deserialize, Serialize};

use crate::client::ShopClient;
use crate::error::Result;
use crate::resources::shop::UploadImageResponse;

/// Product endpoint caller bound to one shop.
#[derive(Clone)]
pub struct Product {
    client: ShopClient,
}

impl Product {
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self { client }
    }

    /// Category tree for the shop's region (`product/get_category`).
    pub async fn get_category(&self, language: Option<&str>) -> Result<GetCategoryResponse> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            language: Option<&'a str>,
        }
        self.client.get("product/get_category", &Params { language }).await
    }

    /// Attributes required or allowed for a leaf category
    /// (`product/get_attributes`).
    pub async fn get_attributes(
        &self,
        category_id: u64,
        language: Option<&str>,
    ) -> Result<GetAttributesResponse> {
        #[derive(Serialize)]
        struct Params<'a> {
            category_id: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            language: Option<&'a str>,
        }
        self.client
            .get("product/get_attributes", &Params { category_id, language })
            .await
    }

    /// One page of registered brands for a category
    /// (`product/get_brand_list`).
    pub async fn get_brand_list(&self, params: &GetBrandListParams) -> Result<GetBrandListResponse> {
        self.client.get("product/get_brand_list", params).await
    }

    /// One page of the shop's item ids (`product/get_item_list`). Each entry
    /// of `item_status` becomes its own query parameter.
    pub async fn get_item_list(&self, params: &GetItemListParams) -> Result<GetItemListResponse> {
        self.client.get("product/get_item_list", params).await
    }

    /// Base info for the given item ids (`product/get_item_base_info`,
    /// comma-joined list, at most 50 ids per call).
    pub async fn get_item_base_info(
        &self,
        item_id_list: &[u64],
        need_tax_info: bool,
        need_complaint_policy: bool,
    ) -> Result<GetItemBaseInfoResponse> {
        #[derive(Serialize)]
        struct Params {
            item_id_list: String,
            need_tax_info: bool,
            need_complaint_policy: bool,
        }
        self.client
            .get(
                "product/get_item_base_info",
                &Params {
                    item_id_list: join_ids(item_id_list),
                    need_tax_info,
                    need_complaint_policy,
                },
            )
            .await
    }

    /// Sales and engagement counters for the given item ids
    /// (`product/get_item_extra_info`).
    pub async fn get_item_extra_info(
        &self,
        item_id_list: &[u64],
    ) -> Result<GetItemExtraInfoResponse> {
        #[derive(Serialize)]
        struct Params {
            item_id_list: String,
        }
        self.client
            .get(
                "product/get_item_extra_info",
                &Params { item_id_list: join_ids(item_id_list) },
            )
            .await
    }

    /// Tier variations and models of one item (`product/get_model_list`).
    pub async fn get_model_list(&self, item_id: u64) -> Result<GetModelListResponse> {
        #[derive(Serialize)]
        struct Params {
            item_id: u64,
        }
        self.client.get("product/get_model_list", &Params { item_id }).await
    }

    /// Create an item (`product/add_item`). The created item starts without
    /// models; call [`Product::init_tier_variation`] afterwards to add them.
    pub async fn add_item(&self, params: &AddItemParams) -> Result<AddItemResponse> {
        self.client.post_json("product/add_item", params).await
    }

    /// Update item fields (`product/update_item`). Only the fields set in
    /// `params` are sent.
    pub async fn update_item(&self, params: &UpdateItemParams) -> Result<UpdateItemResponse> {
        self.client.post_json("product/update_item", params).await
    }

    /// Update prices of an item or its models (`product/update_price`).
    /// Per-model failures come back in `failure_list`.
    pub async fn update_price(
        &self,
        item_id: u64,
        price_list: &[PriceUpdate],
    ) -> Result<UpdatePriceResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            item_id: u64,
            price_list: &'a [PriceUpdate],
        }
        self.client
            .post_json("product/update_price", &Body { item_id, price_list })
            .await
    }

    /// Update seller stock of an item or its models
    /// (`product/update_stock`).
    pub async fn update_stock(
        &self,
        item_id: u64,
        stock_list: &[StockUpdate],
    ) -> Result<UpdateStockResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            item_id: u64,
            stock_list: &'a [StockUpdate],
        }
        self.client
            .post_json("product/update_stock", &Body { item_id, stock_list })
            .await
    }

    /// Replace an item's tier variations and models
    /// (`product/init_tier_variation`).
    pub async fn init_tier_variation(
        &self,
        params: &InitTierVariationParams,
    ) -> Result<InitTierVariationResponse> {
        self.client
            .post_json("product/init_tier_variation", params)
            .await
    }

    /// List or unlist items in bulk (`product/unlist_item`).
    pub async fn unlist_item(&self, item_list: &[UnlistItem]) -> Result<UnlistItemResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            item_list: &'a [UnlistItem],
        }
        self.client.post_json("product/unlist_item", &Body { item_list }).await
    }

    /// Upload a product image to the shop media space
    /// (`media_space/upload_image`); the returned `image_id` feeds
    /// [`AddItemParams::image`].
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadImageResponse> {
        use reqwest::multipart::{Form, Part};
        let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name.to_string()));
        self.client.post_multipart("media_space/upload_image", form).await
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Platform item status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Normal,
    Deleted,
    Unlist,
    Banned,
}

// ---- 请求参数 ----

/// Parameters of [`Product::get_brand_list`].
#[derive(Debug, Clone, Serialize)]
pub struct GetBrandListParams {
    pub category_id: u64,
    /// 1 = normal brands, 2 = pending brands.
    pub status: u32,
    pub page_size: u32,
    pub offset: u32,
}

/// Parameters of [`Product::get_item_list`].
#[derive(Debug, Clone, Serialize)]
pub struct GetItemListParams {
    pub offset: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_to: Option<i64>,
    /// Statuses to include; each repeats the `item_status` query key.
    pub item_status: Vec<ItemStatus>,
}

/// Parameters of [`Product::add_item`].
#[derive(Debug, Clone, Serialize)]
pub struct AddItemParams {
    pub original_price: f64,
    pub description: String,
    pub item_name: String,
    pub category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sku: Option<String>,
    /// Stock of the single default model; superseded by
    /// [`Product::init_tier_variation`] models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_stock: Option<u32>,
    /// Kilograms.
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionParams>,
    pub logistic_info: Vec<LogisticInfoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_list: Option<Vec<AttributeParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_order: Option<PreOrderParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandParams>,
    /// `NEW` or `USED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_status: Option<ItemStatus>,
}

/// Parameters of [`Product::update_item`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateItemParams {
    pub item_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistic_info: Option<Vec<LogisticInfoParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_list: Option<Vec<AttributeParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_order: Option<PreOrderParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionParams {
    /// Centimeters.
    pub package_length: u32,
    pub package_width: u32,
    pub package_height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogisticInfoParams {
    pub logistic_id: u64,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttributeParams {
    pub attribute_id: u64,
    pub attribute_value_list: Vec<AttributeValueParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttributeValueParams {
    pub value_id: u64,
    /// Free-text value for attributes that allow one; `value_id` is 0 then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_value_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageParams {
    pub image_id_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreOrderParams {
    pub is_pre_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_ship: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandParams {
    pub brand_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_brand_name: Option<String>,
}

/// One entry of [`Product::update_price`]. Omit `model_id` for items without
/// models.
#[derive(Debug, Clone, Serialize)]
pub struct PriceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u64>,
    pub original_price: f64,
}

/// One entry of [`Product::update_stock`].
#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u64>,
    pub normal_stock: u32,
}

/// Parameters of [`Product::init_tier_variation`].
#[derive(Debug, Clone, Serialize)]
pub struct InitTierVariationParams {
    pub item_id: u64,
    pub tier_variation: Vec<TierVariationParams>,
    pub model: Vec<ModelParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierVariationParams {
    /// Dimension name, e.g. "Colour".
    pub name: String,
    pub option_list: Vec<TierVariationOptionParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierVariationOptionParams {
    pub option: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelParams {
    /// One option index per tier, in tier order.
    pub tier_index: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_sku: Option<String>,
}

/// One entry of [`Product::unlist_item`].
#[derive(Debug, Clone, Serialize)]
pub struct UnlistItem {
    pub item_id: u64,
    /// true unlists, false relists.
    pub unlist: bool,
}

// ---- 响应载荷 ----

#[derive(Debug, Clone, Deserialize)]
pub struct GetCategoryResponse {
    pub response: Option<CategoryPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPage {
    #[serde(default)]
    pub category_list: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub category_id: u64,
    /// 0 for root categories.
    pub parent_category_id: Option<u64>,
    pub original_category_name: Option<String>,
    pub display_category_name: Option<String>,
    pub has_children: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAttributesResponse {
    pub response: Option<AttributePage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributePage {
    #[serde(default)]
    pub attribute_list: Vec<Attribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub attribute_id: u64,
    pub original_attribute_name: Option<String>,
    pub display_attribute_name: Option<String>,
    pub is_mandatory: Option<bool>,
    /// `DROP_DOWN`, `MULTIPLE_SELECT`, `TEXT_FILED` or `COMBO_BOX`, as the
    /// platform spells them.
    pub input_type: Option<String>,
    #[serde(default)]
    pub attribute_value_list: Vec<AttributeValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeValue {
    pub value_id: u64,
    pub original_value_name: Option<String>,
    pub display_value_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetBrandListResponse {
    pub response: Option<BrandPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandPage {
    #[serde(default)]
    pub brand_list: Vec<Brand>,
    pub has_next_page: Option<bool>,
    pub next_offset: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub brand_id: u64,
    pub original_brand_name: Option<String>,
    pub display_brand_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetItemListResponse {
    pub response: Option<ItemListPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemListPage {
    #[serde(default)]
    pub item: Vec<ItemListEntry>,
    pub total_count: Option<u32>,
    pub has_next_page: Option<bool>,
    pub next_offset: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemListEntry {
    pub item_id: u64,
    pub item_status: Option<ItemStatus>,
    pub update_time: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetItemBaseInfoResponse {
    pub response: Option<ItemBaseInfoPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemBaseInfoPage {
    #[serde(default)]
    pub item_list: Vec<ItemBaseInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemBaseInfo {
    pub item_id: u64,
    pub category_id: Option<u64>,
    pub item_name: Option<String>,
    pub item_sku: Option<String>,
    pub item_status: Option<ItemStatus>,
    pub create_time: Option<i64>,
    pub update_time: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub price_info: Vec<PriceInfo>,
    pub image: Option<ImageDetails>,
    /// Kilograms, serialized as a decimal string by the platform.
    pub weight: Option<String>,
    pub dimension: Option<Dimension>,
    pub has_model: Option<bool>,
    pub brand: Option<BrandInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceInfo {
    pub currency: Option<String>,
    pub original_price: Option<f64>,
    pub current_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageDetails {
    #[serde(default)]
    pub image_url_list: Vec<String>,
    #[serde(default)]
    pub image_id_list: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dimension {
    pub package_length: Option<u32>,
    pub package_width: Option<u32>,
    pub package_height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandInfo {
    pub brand_id: Option<u64>,
    pub original_brand_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetItemExtraInfoResponse {
    pub response: Option<ItemExtraInfoPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemExtraInfoPage {
    #[serde(default)]
    pub item_list: Vec<ItemExtraInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemExtraInfo {
    pub item_id: u64,
    pub sale: Option<u64>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub rating_star: Option<f64>,
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetModelListResponse {
    pub response: Option<ModelListPage>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelListPage {
    #[serde(default)]
    pub tier_variation: Vec<TierVariation>,
    #[serde(default)]
    pub model: Vec<Model>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierVariation {
    pub name: Option<String>,
    #[serde(default)]
    pub option_list: Vec<TierVariationOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierVariationOption {
    pub option: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    pub model_id: u64,
    pub model_sku: Option<String>,
    #[serde(default)]
    pub tier_index: Vec<u32>,
    #[serde(default)]
    pub price_info: Vec<PriceInfo>,
    pub stock_info_v2: Option<StockInfoV2>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockInfoV2 {
    pub summary_info: Option<StockSummaryInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockSummaryInfo {
    pub total_reserved_stock: Option<u32>,
    pub total_available_stock: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemResponse {
    pub response: Option<AddItemResult>,
    pub request_id: Option<String>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemResult {
    pub item_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemResponse {
    pub response: Option<UpdateItemResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemResult {
    pub item_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriceResponse {
    pub response: Option<UpdatePriceResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriceResult {
    #[serde(default)]
    pub success_list: Vec<PriceUpdateSuccess>,
    #[serde(default)]
    pub failure_list: Vec<UpdateFailure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceUpdateSuccess {
    pub model_id: Option<u64>,
    pub original_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockResponse {
    pub response: Option<UpdateStockResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockResult {
    #[serde(default)]
    pub success_list: Vec<StockUpdateSuccess>,
    #[serde(default)]
    pub failure_list: Vec<UpdateFailure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockUpdateSuccess {
    pub model_id: Option<u64>,
    pub normal_stock: Option<u32>,
}

/// Per-model failure of a price or stock update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFailure {
    pub model_id: Option<u64>,
    pub failed_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitTierVariationResponse {
    pub response: Option<InitTierVariationResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitTierVariationResult {
    #[serde(default)]
    pub model: Vec<CreatedModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedModel {
    pub model_id: u64,
    #[serde(default)]
    pub tier_index: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnlistItemResponse {
    pub response: Option<UnlistItemResult>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnlistItemResult {
    #[serde(default)]
    pub success_list: Vec<UnlistSuccess>,
    #[serde(default)]
    pub failure_list: Vec<UnlistFailure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnlistSuccess {
    pub item_id: u64,
    pub unlist: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnlistFailure {
    pub item_id: u64,
    pub failed_reason: Option<String>,
}
