//! 按资源划分的端点封装
//!
//! 每个端点一对类型：请求参数结构体（`Serialize`，`None` 字段不发送）和
//! 响应结构体（`Deserialize`，平台可能省略的字段都是 `Option`）。
//! 信封里的 `error`/`message` 由传输层消化成 [`crate::ShopeeError`]，
//! 这里只建模成功形状和 `request_id`。

pub mod auth;
pub mod logistics;
pub mod order;
pub mod product;
pub mod shop;

pub use auth::Auth;
pub use logistics::Logistics;
pub use order::Order;
pub use product::Product;
pub use shop::Shop;
