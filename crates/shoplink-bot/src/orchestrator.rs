//! Drives the lookup flows for one `s <url>` command.
//!
//! Chat I/O goes through the [`Conversation`] trait so the flows can run
//! against Discord in production and a scripted fake in tests. Storefront
//! failures are turned into replies here; only chat I/O errors propagate.

use std::time::Duration;

use async_trait::async_trait;
use shoplink_core::{AppConfig, CollectionEntry};
use shoplink_scraper::{classify, looks_like_item, LinkKind, ScraperError, StorefrontClient};

use crate::render::{
    collection_card, item_card, selection_prompt, Card, COLLECTION_FAILED, EMPTY_COLLECTION,
    INVALID_LINK, NOT_A_PRODUCT, PROCESSING_COLLECTION, RETRYING_AS_PRODUCT, SELECTION_TIMED_OUT,
};
use crate::selection::SelectionSession;

/// New content for the status message posted by [`Conversation::post_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Text(String),
    Card(Card),
}

/// The chat context a single command runs in: the requester, the channel,
/// and at most one editable status message.
#[async_trait]
pub trait Conversation: Send {
    fn requester_id(&self) -> String;

    fn channel_id(&self) -> String;

    /// Replies to the command message.
    async fn reply(&mut self, text: &str) -> anyhow::Result<()>;

    /// Posts a plain message in the channel.
    async fn say(&mut self, text: &str) -> anyhow::Result<()>;

    async fn send_card(&mut self, card: Card) -> anyhow::Result<()>;

    /// Replies with a status message that later [`Self::update_status`] calls edit.
    async fn post_status(&mut self, text: &str) -> anyhow::Result<()>;

    async fn update_status(&mut self, update: StatusUpdate) -> anyhow::Result<()>;

    /// Starts listening for the requester's messages in this channel for up
    /// to `wait`. Messages sent after this call are buffered for
    /// [`Self::next_reply`].
    async fn begin_selection(&mut self, wait: Duration) -> anyhow::Result<()>;

    /// Waits up to `wait` for the requester's next message in this channel.
    ///
    /// Returns `Ok(None)` when nothing arrives in time.
    async fn next_reply(&mut self, wait: Duration) -> anyhow::Result<Option<String>>;
}

/// Rendering and interaction limits handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct InteractionSettings {
    pub selection_timeout: Duration,
    pub display_limit: usize,
    pub footer: Option<String>,
}

impl InteractionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            selection_timeout: Duration::from_secs(config.selection_timeout_secs),
            display_limit: config.collection_display_limit,
            footer: config.embed_footer.clone(),
        }
    }
}

pub struct Orchestrator {
    client: StorefrontClient,
    settings: InteractionSettings,
}

impl Orchestrator {
    #[must_use]
    pub fn new(client: StorefrontClient, settings: InteractionSettings) -> Self {
        Self { client, settings }
    }

    /// Handles `s <url>`. A missing `<url>` gets the invalid-link reply.
    ///
    /// # Errors
    ///
    /// Returns an error only if talking to the chat platform fails.
    pub async fn handle_lookup<C: Conversation>(
        &self,
        conv: &mut C,
        link: Option<&str>,
    ) -> anyhow::Result<()> {
        let Some(link) = link else {
            return conv.reply(INVALID_LINK).await;
        };

        let classified = classify(link);
        tracing::info!(
            requester = %conv.requester_id(),
            channel = %conv.channel_id(),
            kind = ?classified.kind,
            link,
            "handling lookup"
        );

        match classified.kind {
            LinkKind::Collection => self.collection_flow(conv, link).await,
            LinkKind::Item => self.item_flow(conv, link).await,
            LinkKind::Invalid => conv.reply(INVALID_LINK).await,
        }
    }

    async fn item_flow<C: Conversation>(&self, conv: &mut C, link: &str) -> anyhow::Result<()> {
        match self.client.lookup_item(link).await {
            Ok(item) => {
                conv.send_card(item_card(&item, self.settings.footer.as_deref()))
                    .await
            }
            Err(err) => {
                tracing::warn!(link, error = %err, "item lookup failed");
                conv.reply(NOT_A_PRODUCT).await
            }
        }
    }

    async fn collection_flow<C: Conversation>(
        &self,
        conv: &mut C,
        link: &str,
    ) -> anyhow::Result<()> {
        conv.post_status(PROCESSING_COLLECTION).await?;

        let entries = match self.client.lookup_collection(link).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(link, error = %err, "collection lookup failed");
                conv.update_status(StatusUpdate::Text(COLLECTION_FAILED.to_string()))
                    .await?;
                if should_retry_as_item(link, &err) {
                    conv.say(RETRYING_AS_PRODUCT).await?;
                    return self.item_flow(conv, link).await;
                }
                return Ok(());
            }
        };

        if entries.is_empty() {
            return conv
                .update_status(StatusUpdate::Text(EMPTY_COLLECTION.to_string()))
                .await;
        }

        let total = entries.len();
        let displayed: Vec<CollectionEntry> = entries
            .into_iter()
            .take(self.settings.display_limit)
            .collect();

        let listing = collection_card(link, &displayed, total, self.settings.footer.as_deref());
        let session = SelectionSession::open(
            conv.requester_id(),
            conv.channel_id(),
            displayed,
            self.settings.selection_timeout,
        );

        // Listen before the listing is visible so an early reply is not lost.
        conv.begin_selection(self.settings.selection_timeout).await?;
        conv.update_status(StatusUpdate::Card(listing)).await?;
        conv.say(&selection_prompt(self.settings.selection_timeout.as_secs()))
            .await?;

        match await_selection(conv, &session).await? {
            Some(entry) => self.item_flow(conv, &entry.product_url).await,
            None => {
                tracing::info!(
                    requester = %session.requester_id,
                    channel = %session.channel_id,
                    "collection selection timed out"
                );
                conv.say(SELECTION_TIMED_OUT).await
            }
        }
    }
}

/// Waits for the first qualifying reply. Non-qualifying replies are ignored
/// and the wait continues until the session deadline.
async fn await_selection<C: Conversation>(
    conv: &mut C,
    session: &SelectionSession,
) -> anyhow::Result<Option<CollectionEntry>> {
    while let Some(wait) = session.remaining() {
        let Some(reply) = conv.next_reply(wait).await? else {
            return Ok(None);
        };
        if let Some(entry) = session.resolve(&reply) {
            tracing::debug!(
                requester = %session.requester_id,
                handle = %entry.handle,
                "collection selection received"
            );
            return Ok(Some(entry.clone()));
        }
    }
    Ok(None)
}

/// A failed collection lookup is retried once as an item lookup when the
/// storefront rejected it and the link also carries the product marker.
#[must_use]
pub fn should_retry_as_item(link: &str, err: &ScraperError) -> bool {
    err.allows_item_fallback() && looks_like_item(link)
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
