//! In-memory record of guilds already warned about a missing log channel.
//!
//! The set only grows and is never persisted, so each unconfigured guild produces at
//! most one warning per process lifetime.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Concurrency-safe set of guild IDs that have already produced the
/// "no log channel configured" warning.
///
/// Clones share the same underlying set, so a clone can be handed to every
/// in-flight deletion event.
#[derive(Clone, Default)]
pub struct WarnedGuilds {
    guilds: Arc<RwLock<HashSet<u64>>>,
}

impl WarnedGuilds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `guild_id` as warned.
    ///
    /// Insertion happens under the write lock, so concurrent callers for the same guild
    /// observe exactly one `true`.
    ///
    /// # Returns
    /// - `true` - First time this guild was seen, the caller should emit the warning
    /// - `false` - Already warned, the caller should stay silent
    pub async fn mark_warned(&self, guild_id: u64) -> bool {
        self.guilds.write().await.insert(guild_id)
    }

    /// Whether a warning has already been emitted for `guild_id`.
    #[cfg(test)]
    pub async fn contains(&self, guild_id: u64) -> bool {
        self.guilds.read().await.contains(&guild_id)
    }
}
