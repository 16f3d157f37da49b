//! Shopify response types for the public storefront JSON endpoints.
//!
//! ## Endpoints
//!
//! - `GET /products/<handle>.json` returns `{ "product": { ... } }` with a
//!   single product, its primary `image` and its `variants`.
//! - `GET /collections/<handle>/products.json` returns `{ "products": [ ... ] }`
//!   with the collection's products in storefront order.
//!
//! ## Observed quirks
//!
//! ### `image`
//! `null` for products without a primary image. Modeled as `Option`.
//!
//! ### `weight` / `weight_unit`
//! `weight` is a JSON number (`1`, `0.25`); `weight_unit` a short string such
//! as `"kg"` or `"lb"`. Both are present on the per-product endpoint but some
//! themes strip them, so both default to `None`.
//!
//! ### `sku`
//! May be `null` or an empty string. Empty strings are normalized to `None`.
//!
//! Unknown fields are ignored; the storefront returns far more than we read.

use serde::Deserialize;

/// A product from `GET /products/<handle>.json`.
#[derive(Debug, Deserialize)]
pub struct StorefrontProduct {
    pub title: String,

    /// URL slug for the product page (e.g., `"shoe-x"`).
    pub handle: String,

    #[serde(default)]
    pub vendor: Option<String>,

    /// Primary image. `null` when the product has no images.
    #[serde(default)]
    pub image: Option<StorefrontImage>,

    /// All purchasable variants, in storefront order.
    #[serde(default)]
    pub variants: Vec<StorefrontVariant>,
}

/// A single purchasable variant of a [`StorefrontProduct`].
#[derive(Debug, Deserialize)]
pub struct StorefrontVariant {
    /// Shopify numeric variant ID, used in cart permalinks.
    pub id: i64,

    /// Display title, e.g. `"Small"` or `"Default Title"`.
    pub title: String,

    /// Current price as a decimal string (e.g., `"10.00"`).
    pub price: String,

    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default)]
    pub weight_unit: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,
}

/// One entry of the `products` array from a collection's `products.json`.
#[derive(Debug, Deserialize)]
pub struct CollectionProduct {
    pub id: i64,
    pub title: String,
    pub handle: String,

    /// Gallery images; the first one is used as the thumbnail.
    #[serde(default)]
    pub images: Vec<StorefrontImage>,
}

/// A product image. Only the CDN URL is read.
#[derive(Debug, Deserialize)]
pub struct StorefrontImage {
    pub src: String,
}
