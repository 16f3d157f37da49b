//! Origin and domain extraction for storefront links.

use crate::endpoint::strip_query;
use crate::link::COLLECTION_MARKER;

/// Extracts the scheme+host origin from a storefront link.
///
/// Given `"https://example.com/products/shoe-x?variant=1"`, returns
/// `"https://example.com"`. Splits on `/` and keeps the first three parts
/// (scheme, empty, host) so a port in the host is preserved as-is.
#[must_use]
pub fn site_origin(link: &str) -> String {
    strip_query(link)
        .splitn(4, '/')
        .take(3)
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns everything before the collection marker in `link`.
///
/// For `"https://example.com/en-ca/collections/all"` this is
/// `"https://example.com/en-ca"`, so product links built from it stay on the
/// same storefront locale. Links without the marker are returned with the
/// query and trailing slash removed.
#[must_use]
pub fn collection_base(link: &str) -> String {
    match link.split_once(COLLECTION_MARKER) {
        Some((base, _)) => base.to_owned(),
        None => strip_query(link).to_owned(),
    }
}

/// Extracts the hostname from a link for use in log fields.
///
/// Falls back to the full link if parsing fails.
#[must_use]
pub(crate) fn extract_domain(link: &str) -> String {
    reqwest::Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| link.to_owned())
}
