//! Derivation of storefront JSON endpoints from human-facing links.
//!
//! Shopify serves a JSON rendition of most storefront pages by appending
//! `.json` to the path. Products map one-to-one; collections expose their
//! product list under `/collections/<handle>/products.json`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::link::{ClassifiedLink, LinkKind};

/// Suffix that turns a storefront page path into its JSON rendition.
pub const JSON_SUFFIX: &str = ".json";

static BARE_COLLECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/collections/[^/]+$").expect("valid regex"));
static COLLECTION_PRODUCTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/collections/[^/]+/products$").expect("valid regex"));

/// A structured-data URL. Always ends in [`JSON_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Derives the endpoint for a classified link, or `None` for
    /// [`LinkKind::Invalid`].
    #[must_use]
    pub fn for_link(link: &ClassifiedLink) -> Option<Self> {
        match link.kind {
            LinkKind::Item => Some(derive_item_endpoint(&link.raw_url)),
            LinkKind::Collection => Some(derive_collection_endpoint(&link.raw_url)),
            LinkKind::Invalid => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives `<product page>.json` from a product link.
///
/// The query string and fragment are dropped and a trailing slash is
/// trimmed. Already-suffixed input is returned unchanged.
#[must_use]
pub fn derive_item_endpoint(url: &str) -> Endpoint {
    let path = strip_query(url);
    if path.ends_with(JSON_SUFFIX) {
        return Endpoint(path.to_owned());
    }
    Endpoint(format!("{path}{JSON_SUFFIX}"))
}

/// Derives the `products.json` listing for a collection link.
///
/// Rules, first match wins:
/// 1. `/collections/<handle>` → append `/products.json`
/// 2. `/collections/<handle>/products` → append `.json`
/// 3. anything not already ending in `.json` → append `/products.json`
///
/// Input that already ends in `.json` is returned unchanged.
#[must_use]
pub fn derive_collection_endpoint(url: &str) -> Endpoint {
    let path = strip_query(url);

    if BARE_COLLECTION_RE.is_match(path) {
        Endpoint(format!("{path}/products{JSON_SUFFIX}"))
    } else if COLLECTION_PRODUCTS_RE.is_match(path) {
        Endpoint(format!("{path}{JSON_SUFFIX}"))
    } else if path.ends_with(JSON_SUFFIX) {
        Endpoint(path.to_owned())
    } else {
        Endpoint(format!("{path}/products{JSON_SUFFIX}"))
    }
}

/// Returns `url` up to the first `?` or `#`, without trailing slashes.
pub(crate) fn strip_query(url: &str) -> &str {
    url.split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::classify;

    #[test]
    fn item_endpoint_strips_query_and_appends_suffix() {
        assert_eq!(
            derive_item_endpoint("https://example.com/products/shoe-x?variant=123").as_str(),
            "https://example.com/products/shoe-x.json"
        );
    }

    #[test]
    fn item_endpoint_trims_trailing_slash() {
        assert_eq!(
            derive_item_endpoint("https://example.com/products/shoe-x/").as_str(),
            "https://example.com/products/shoe-x.json"
        );
    }

    #[test]
    fn item_endpoint_is_idempotent() {
        let once = derive_item_endpoint("https://example.com/products/shoe-x?variant=1");
        let twice = derive_item_endpoint(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn item_endpoint_keeps_collection_prefix() {
        assert_eq!(
            derive_item_endpoint("https://example.com/collections/sale/products/shoe-x").as_str(),
            "https://example.com/collections/sale/products/shoe-x.json"
        );
    }

    #[test]
    fn collection_endpoint_bare_handle() {
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/all").as_str(),
            "https://example.com/collections/all/products.json"
        );
    }

    #[test]
    fn collection_endpoint_products_segment() {
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/all/products").as_str(),
            "https://example.com/collections/all/products.json"
        );
    }

    #[test]
    fn collection_endpoint_already_correct_is_unchanged() {
        let url = "https://example.com/collections/all/products.json";
        assert_eq!(derive_collection_endpoint(url).as_str(), url);
    }

    #[test]
    fn collection_endpoint_is_idempotent() {
        let once = derive_collection_endpoint("https://example.com/collections/all");
        assert_eq!(derive_collection_endpoint(once.as_str()), once);
    }

    #[test]
    fn collection_endpoint_non_conforming_path_gets_products_suffix() {
        // Tag filter pages carry an extra segment after the handle.
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/shoes/red").as_str(),
            "https://example.com/collections/shoes/red/products.json"
        );
    }

    #[test]
    fn collection_endpoint_discards_query_string() {
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/all?page=2&sort_by=price")
                .as_str(),
            "https://example.com/collections/all/products.json"
        );
    }

    #[test]
    fn collection_endpoint_trailing_slash_does_not_double_up() {
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/all/").as_str(),
            "https://example.com/collections/all/products.json"
        );
        assert_eq!(
            derive_collection_endpoint("https://example.com/collections/all/products/").as_str(),
            "https://example.com/collections/all/products.json"
        );
    }

    #[test]
    fn for_link_rejects_invalid_links() {
        assert!(Endpoint::for_link(&classify("https://example.com/pages/about")).is_none());
    }

    #[test]
    fn for_link_dispatches_on_kind() {
        let item = Endpoint::for_link(&classify("https://example.com/products/a")).unwrap();
        let collection =
            Endpoint::for_link(&classify("https://example.com/collections/all")).unwrap();
        assert_eq!(item.as_str(), "https://example.com/products/a.json");
        assert_eq!(
            collection.as_str(),
            "https://example.com/collections/all/products.json"
        );
    }

    #[test]
    fn every_derived_endpoint_ends_in_suffix() {
        for url in [
            "https://a.com/products/x",
            "https://a.com/collections/y",
            "https://a.com/collections/y/products",
            "https://a.com/collections/y/z?q=1",
        ] {
            let endpoint = Endpoint::for_link(&classify(url)).unwrap();
            assert!(endpoint.as_str().ends_with(JSON_SUFFIX), "url: {url}");
            assert!(!endpoint.as_str().contains('?'), "url: {url}");
        }
    }
}
