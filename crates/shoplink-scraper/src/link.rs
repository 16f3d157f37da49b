//! Classification of user-supplied storefront links.

/// Path segment that marks a collection page.
pub const COLLECTION_MARKER: &str = "/collections/";

/// Path segment that marks a product page.
pub const ITEM_MARKER: &str = "/products/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Item,
    Collection,
    Invalid,
}

/// A raw link together with the kind of storefront page it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub kind: LinkKind,
    pub raw_url: String,
}

/// Classifies `url` by substring matching only; no network access.
///
/// A product marker wins over a collection marker, so
/// `/collections/x/products/y` is an [`LinkKind::Item`].
#[must_use]
pub fn classify(url: &str) -> ClassifiedLink {
    let kind = if url.contains(COLLECTION_MARKER) && !looks_like_item(url) {
        LinkKind::Collection
    } else if looks_like_item(url) {
        LinkKind::Item
    } else {
        LinkKind::Invalid
    };

    ClassifiedLink {
        kind,
        raw_url: url.to_owned(),
    }
}

/// Returns `true` if `url` contains the product path marker.
#[must_use]
pub fn looks_like_item(url: &str) -> bool {
    url.contains(ITEM_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_link_is_item() {
        let link = classify("https://example.com/products/shoe-x?variant=123");
        assert_eq!(link.kind, LinkKind::Item);
        assert_eq!(link.raw_url, "https://example.com/products/shoe-x?variant=123");
    }

    #[test]
    fn collection_link_is_collection() {
        assert_eq!(
            classify("https://example.com/collections/all").kind,
            LinkKind::Collection
        );
    }

    #[test]
    fn collection_products_listing_without_trailing_segment_is_collection() {
        // "/products" with no trailing slash is the listing, not a product page.
        assert_eq!(
            classify("https://example.com/collections/all/products").kind,
            LinkKind::Collection
        );
    }

    #[test]
    fn product_nested_in_collection_is_item() {
        assert_eq!(
            classify("https://example.com/collections/sale/products/shoe-x").kind,
            LinkKind::Item
        );
    }

    #[test]
    fn both_markers_never_classify_as_collection() {
        for url in [
            "https://a.com/collections/x/products/y",
            "https://a.com/products/y?from=/collections/x",
            "https://a.com/collections/products/products/z",
        ] {
            assert_eq!(classify(url).kind, LinkKind::Item, "url: {url}");
        }
    }

    #[test]
    fn links_without_markers_are_invalid() {
        for url in [
            "https://example.com/",
            "https://example.com/pages/about",
            "https://example.com/collections",
            "https://example.com/products",
            "not a url",
            "",
        ] {
            assert_eq!(classify(url).kind, LinkKind::Invalid, "url: {url}");
        }
    }

    #[test]
    fn looks_like_item_checks_product_marker_only() {
        assert!(looks_like_item("https://a.com/products/y"));
        assert!(!looks_like_item("https://a.com/collections/all"));
    }
}
