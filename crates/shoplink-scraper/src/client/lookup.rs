//! Derive → fetch → normalize chains for `StorefrontClient`.

use serde::Serialize;
use shoplink_core::{CollectionEntry, Item};

use crate::endpoint::{derive_collection_endpoint, derive_item_endpoint, Endpoint};
use crate::error::ScraperError;
use crate::link::{ClassifiedLink, LinkKind};
use crate::normalize::{normalize_collection, normalize_item};

use super::origin::extract_domain;
use super::StorefrontClient;

/// Result of [`StorefrontClient::lookup`], shaped by the link's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Lookup {
    Item(Item),
    Collection(Vec<CollectionEntry>),
}

impl StorefrontClient {
    /// Looks up whatever a classified link points at.
    ///
    /// Returns `Ok(None)` for [`LinkKind::Invalid`] without touching the
    /// network.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_json`] or the normalizer for
    /// the link's kind.
    pub async fn lookup(&self, link: &ClassifiedLink) -> Result<Option<Lookup>, ScraperError> {
        let Some(endpoint) = Endpoint::for_link(link) else {
            return Ok(None);
        };

        let found = match link.kind {
            LinkKind::Item => Lookup::Item(self.fetch_item(&endpoint, &link.raw_url).await?),
            LinkKind::Collection => {
                Lookup::Collection(self.fetch_collection(&endpoint, &link.raw_url).await?)
            }
            LinkKind::Invalid => return Ok(None),
        };
        Ok(Some(found))
    }

    /// Looks up a single product from its storefront link, whatever the
    /// link classifies as.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_json`] or [`normalize_item`].
    pub async fn lookup_item(&self, link: &str) -> Result<Item, ScraperError> {
        self.fetch_item(&derive_item_endpoint(link), link).await
    }

    /// Looks up every product listed in a collection, in storefront order.
    ///
    /// The full list is returned; callers decide how many to display.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_json`] or [`normalize_collection`].
    pub async fn lookup_collection(
        &self,
        link: &str,
    ) -> Result<Vec<CollectionEntry>, ScraperError> {
        self.fetch_collection(&derive_collection_endpoint(link), link)
            .await
    }

    async fn fetch_item(&self, endpoint: &Endpoint, link: &str) -> Result<Item, ScraperError> {
        let raw = self.fetch_json(endpoint).await?;
        let item = normalize_item(raw, link)?;

        tracing::info!(
            domain = %extract_domain(link),
            handle = %item.handle,
            variants = item.variant_count(),
            "item lookup complete"
        );
        Ok(item)
    }

    async fn fetch_collection(
        &self,
        endpoint: &Endpoint,
        link: &str,
    ) -> Result<Vec<CollectionEntry>, ScraperError> {
        let raw = self.fetch_json(endpoint).await?;
        let entries = normalize_collection(raw, link)?;

        tracing::info!(
            domain = %extract_domain(link),
            endpoint = %endpoint,
            entries = entries.len(),
            "collection lookup complete"
        );
        Ok(entries)
    }
}
