use serde::{Deserialize, Serialize};

/// A single storefront product, normalized for rendering as a chat reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, e.g. `"Shoe X"`.
    pub title: String,
    /// Storefront URL slug, e.g. `"shoe-x"`.
    pub handle: String,
    /// Vendor name as configured in the store. Empty when the store omits it.
    pub vendor: String,
    /// CDN URL of the primary product image, if the product has one.
    pub thumbnail_url: Option<String>,
    /// The link the lookup was started from, exactly as the user sent it.
    pub source_url: String,
    pub variants: Vec<Variant>,
}

impl Item {
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

/// A purchasable configuration of an [`Item`] (size, colour, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Platform variant ID. This is the ID the cart path takes.
    pub id: i64,
    pub title: String,
    /// Price as a decimal string, exactly as the store returns it, e.g. `"10.00"`.
    pub price: String,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub sku: Option<String>,
    /// Deep link that adds one unit of this variant to the cart,
    /// e.g. `"https://example.com/cart/999:1"`.
    pub add_to_cart_url: String,
}

impl Variant {
    /// Human-readable weight such as `"1 kg"`, or `None` when the store
    /// does not report a weight.
    #[must_use]
    pub fn weight_label(&self) -> Option<String> {
        let weight = self.weight?;
        Some(match self.weight_unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{weight} {unit}"),
            _ => weight.to_string(),
        })
    }
}

/// Summary of one product listed in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: i64,
    pub title: String,
    pub handle: String,
    /// Product page on the same storefront, e.g. `"https://example.com/products/a"`.
    pub product_url: String,
    /// First gallery image, or `None` for products without images.
    pub thumbnail_url: Option<String>,
}
