//! Pending numeric selection after a collection listing.

use std::time::Duration;

use shoplink_core::CollectionEntry;
use tokio::time::Instant;

/// One outstanding "reply with a number" wait.
///
/// Owned by the collection flow that created it and dropped once a valid
/// reply arrives or the deadline passes.
#[derive(Debug)]
pub struct SelectionSession {
    pub requester_id: String,
    pub channel_id: String,
    entries: Vec<CollectionEntry>,
    deadline: Instant,
}

impl SelectionSession {
    #[must_use]
    pub fn open(
        requester_id: String,
        channel_id: String,
        entries: Vec<CollectionEntry>,
        timeout: Duration,
    ) -> Self {
        Self {
            requester_id,
            channel_id,
            entries,
            deadline: Instant::now() + timeout,
        }
    }

    /// Time left before the session expires, or `None` once it has.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    /// Resolves a reply to the entry it selects, if it qualifies.
    #[must_use]
    pub fn resolve(&self, reply: &str) -> Option<&CollectionEntry> {
        parse_selection(reply, self.entries.len()).map(|index| &self.entries[index])
    }
}

/// Parses a 1-based selection in `1..=count` and returns the 0-based index.
///
/// Surrounding whitespace is allowed; anything else that is not a plain
/// integer is rejected.
#[must_use]
pub fn parse_selection(reply: &str, count: usize) -> Option<usize> {
    let choice = reply.trim().parse::<usize>().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}
