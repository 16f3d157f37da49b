//! Normalization from raw storefront JSON to [`shoplink_core`] records.
//!
//! The fetcher hands over an unvalidated [`serde_json::Value`]; this module
//! checks the top-level shape, deserializes into [`crate::types`] and builds
//! the records the bot renders.

use serde_json::Value;
use shoplink_core::{CollectionEntry, Item, Variant};

use crate::client::{collection_base, site_origin};
use crate::error::ScraperError;
use crate::link::ITEM_MARKER;
use crate::types::{CollectionProduct, StorefrontProduct, StorefrontVariant};

/// Quantity encoded in add-to-cart permalinks.
const CART_QUANTITY: u32 = 1;

/// Normalizes a product endpoint response into an [`Item`].
///
/// `link` is the storefront link the lookup started from; its origin is the
/// base of every variant's add-to-cart URL.
///
/// # Errors
///
/// Returns [`ScraperError::Schema`] if the `product` field is absent or null,
/// or if it does not have the shape of a product.
pub fn normalize_item(raw: Value, link: &str) -> Result<Item, ScraperError> {
    let product_value = take_field(raw, "product")
        .filter(|v| !v.is_null())
        .ok_or_else(|| schema("missing product"))?;

    let product: StorefrontProduct = serde_json::from_value(product_value)
        .map_err(|e| schema(format!("malformed product: {e}")))?;

    let cart_base = format!("{}/cart/", site_origin(link));
    let variants = product
        .variants
        .into_iter()
        .map(|variant| normalize_variant(variant, &cart_base))
        .collect();

    Ok(Item {
        title: product.title,
        handle: product.handle,
        vendor: product.vendor.unwrap_or_default(),
        thumbnail_url: product.image.map(|image| image.src),
        source_url: link.to_owned(),
        variants,
    })
}

fn normalize_variant(variant: StorefrontVariant, cart_base: &str) -> Variant {
    Variant {
        add_to_cart_url: format!("{cart_base}{}:{CART_QUANTITY}", variant.id),
        id: variant.id,
        title: variant.title,
        price: variant.price,
        weight: variant.weight,
        weight_unit: variant.weight_unit.filter(|s| !s.is_empty()),
        sku: variant.sku.filter(|s| !s.is_empty()),
    }
}

/// Normalizes a collection `products.json` response into entries, in the
/// order the storefront returned them.
///
/// The sequence is never truncated here.
///
/// # Errors
///
/// Returns [`ScraperError::Schema`] if `products` is absent or not an array,
/// or if an entry lacks `id`, `title` or `handle`.
pub fn normalize_collection(raw: Value, link: &str) -> Result<Vec<CollectionEntry>, ScraperError> {
    let Some(Value::Array(products)) = take_field(raw, "products") else {
        return Err(schema("missing products array"));
    };

    let base = collection_base(link);
    products
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let product: CollectionProduct = serde_json::from_value(value)
                .map_err(|e| schema(format!("malformed products entry at index {index}: {e}")))?;
            Ok(CollectionEntry {
                product_url: format!("{base}{ITEM_MARKER}{}", product.handle),
                thumbnail_url: product.images.into_iter().next().map(|image| image.src),
                id: product.id,
                title: product.title,
                handle: product.handle,
            })
        })
        .collect()
}

/// Removes `field` from a JSON object. Non-objects have no fields.
fn take_field(raw: Value, field: &str) -> Option<Value> {
    match raw {
        Value::Object(mut map) => map.remove(field),
        _ => None,
    }
}

fn schema(reason: impl Into<String>) -> ScraperError {
    ScraperError::Schema {
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
