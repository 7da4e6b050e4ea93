//! # shopee-openapi
//!
//! An async client for the Shopee Open Platform v2 API with request signing,
//! token state management and transparent expired-token replay.
//!
//! Every call is authenticated with the platform's HMAC-SHA256 query-string
//! scheme: the client concatenates `partner_id`, the full API path, a fresh
//! unix timestamp and (for shop-level calls) the access token and shop id,
//! signs the result with the partner key and emits the signature alongside
//! the request parameters. None of this is visible at the call site.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and musl targets.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! shopee-openapi = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shopee_openapi::{
//!     Auth, GetOrderListParams, PartnerClient, SANDBOX_HOST, Shop, ShopClient, ShopeeConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(ShopeeConfig::new(
//!         SANDBOX_HOST.to_string(),
//!         123_456,
//!         "your-partner-key".to_string(),
//!         "https://example.com/callback".to_string(),
//!     ));
//!
//!     // 1. Exchange the authorization code for the first token pair
//!     let auth = Auth::new(PartnerClient::new(config.clone()));
//!     let tokens = auth.get_access_token("code-from-redirect", 67_890).await?;
//!
//!     // 2. Build a shop-level client around the access token
//!     let shop = Shop::new(ShopClient::new(config, 67_890, tokens.access_token));
//!
//!     // 3. Call shop-level endpoints
//!     let info = shop.get_shop_info().await?;
//!     println!("{:?} ({:?})", info.shop_name, info.region);
//!
//!     let orders = shop
//!         .order()
//!         .get_order_list(&GetOrderListParams {
//!             time_range_field: "create_time".to_string(),
//!             time_from: 1_700_000_000,
//!             time_to: 1_700_086_400,
//!             page_size: 20,
//!             cursor: None,
//!             order_status: None,
//!             response_optional_fields: None,
//!         })
//!         .await?;
//!     if let Some(page) = orders.response {
//!         for entry in &page.order_list {
//!             println!("{}", entry.order_sn);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Token Refresh
//!
//! Access tokens expire after a few hours. Attach an [`AccessTokenRefresher`]
//! and the client refreshes and replays transparently when the platform
//! reports an expired token; concurrent requests share a single refresh.
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use shopee_openapi::{ShopClient, ShopeeConfig, ShopeeError};
//! # fn example(config: Arc<ShopeeConfig>) {
//! let client = ShopClient::builder(config, 67_890, "initial-token".to_string())
//!     .refresher(|| async {
//!         // Call Auth::refresh_access_token, read a shared store, ...
//!         Ok::<_, ShopeeError>("fresh-token".to_string())
//!     })
//!     .build();
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ShopeeError>`](ShopeeError). Platform
//! business errors are mapped to structured variants:
//!
//! - [`ShopeeError::AuthExpired`] — access token expired or invalid
//! - [`ShopeeError::InvalidSignature`] — signature rejected (check the partner key)
//! - [`ShopeeError::InvalidParameter`] — the platform rejected a parameter
//! - [`ShopeeError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ShopeeError::NetworkError`] — network connectivity issue (retryable)
//!
//! `AuthExpired` only surfaces when no refresher is configured or when the
//! replayed request fails again. See [`ShopeeError`] for the full list.

mod client;
mod config;
mod error;
mod http;
pub mod resources;
mod sign;
mod utils;

// Re-export error types
pub use error::{Result, ShopeeError};

// Re-export configuration
pub use config::{PRODUCTION_HOST, SANDBOX_HOST, ShopeeConfig};

// Re-export clients and the refresher seam
pub use client::{AccessTokenRefresher, PartnerClient, ShopClient, ShopClientBuilder};

// Re-export the signing primitives for callers that build their own requests
pub use sign::{build_signed_query, build_signed_query_at, sign};

// Re-export endpoint callers
pub use resources::{Auth, Logistics, Order, Product, Shop};

// Re-export the request/response payloads used in the crate examples
pub use resources::order::GetOrderListParams;
