//! Platform-neutral reply cards and the fixed reply texts.
//!
//! The Discord adapter turns a [`Card`] into an embed; tests inspect cards
//! directly.

use shoplink_core::{CollectionEntry, Item, Variant, MAX_CARD_FIELDS};

/// Card accent colour, `#2E6F40`.
pub const CARD_COLOUR: u32 = 0x002E_6F40;

pub const INVALID_LINK: &str = "Please provide a valid Shopify collection or product link!";
pub const NOT_A_PRODUCT: &str = "This is not a valid Shopify product link!";
pub const PROCESSING_COLLECTION: &str = "Processing collection, this may take a moment...";
pub const EMPTY_COLLECTION: &str =
    "No products found in this collection or this isn't a valid collection URL.";
pub const COLLECTION_FAILED: &str =
    "Failed to process this collection. This might not be a valid collection URL.";
pub const RETRYING_AS_PRODUCT: &str = "Trying to process as a product instead...";
pub const SELECTION_TIMED_OUT: &str = "Selection timed out.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub url: Option<String>,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub colour: u32,
    pub footer: Option<String>,
    pub fields: Vec<CardField>,
}

/// Builds the reply card for a product: one inline field per variant with
/// its add-to-cart link, price, weight and SKU.
#[must_use]
pub fn item_card(item: &Item, footer: Option<&str>) -> Card {
    let mut description = format!(
        "Variants of product w/ handle {} on the site {}",
        item.handle, item.vendor
    );
    if item.variant_count() > MAX_CARD_FIELDS {
        description.push_str(&format!(
            "\n(showing the first {MAX_CARD_FIELDS} of {} variants)",
            item.variant_count()
        ));
    }

    Card {
        title: item.title.clone(),
        url: Some(item.source_url.clone()),
        description,
        thumbnail_url: item.thumbnail_url.clone(),
        colour: CARD_COLOUR,
        footer: footer.map(str::to_owned),
        fields: item
            .variants
            .iter()
            .take(MAX_CARD_FIELDS)
            .map(variant_field)
            .collect(),
    }
}

fn variant_field(variant: &Variant) -> CardField {
    let weight = variant.weight_label().unwrap_or_else(|| "n/a".to_string());
    let sku = variant.sku.as_deref().unwrap_or("n/a");
    CardField {
        name: variant.title.clone(),
        value: format!(
            "[ATC]({})\n${}\nWeight: {weight}\nsku: {sku}",
            variant.add_to_cart_url, variant.price
        ),
        inline: true,
    }
}

/// Builds the numbered collection listing.
///
/// `displayed` is the slice actually shown; `total` is how many products the
/// collection returned.
#[must_use]
pub fn collection_card(
    link: &str,
    displayed: &[CollectionEntry],
    total: usize,
    footer: Option<&str>,
) -> Card {
    Card {
        title: "Collection Products".to_string(),
        url: Some(link.to_owned()),
        description: format!(
            "Found {total} products in this collection. Use the number to get ATC links."
        ),
        thumbnail_url: None,
        colour: CARD_COLOUR,
        footer: footer.map(str::to_owned),
        fields: displayed
            .iter()
            .enumerate()
            .map(|(index, entry)| CardField {
                name: format!("{}. {}", index + 1, entry.title),
                value: format!("[View Product]({})", entry.product_url),
                inline: true,
            })
            .collect(),
    }
}

#[must_use]
pub fn selection_prompt(timeout_secs: u64) -> String {
    format!(
        "Reply with the number of the product you want ATC links for \
         (timeout in {timeout_secs} seconds)"
    )
}
