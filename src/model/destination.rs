//! Guild to log channel mapping.

use std::collections::HashMap;

/// Maps guild IDs to the channel that receives their deletion logs.
///
/// Supplied by configuration at startup and read-only afterwards. A guild without an
/// entry is an expected state: the bot simply was not set up to log for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationMap {
    channels: HashMap<u64, u64>,
}

impl DestinationMap {
    /// Creates a mapping from `(guild_id, channel_id)` pairs.
    pub fn new(channels: HashMap<u64, u64>) -> Self {
        Self { channels }
    }

    /// Returns the log channel configured for `guild_id`, if any.
    pub fn channel_for(&self, guild_id: u64) -> Option<u64> {
        self.channels.get(&guild_id).copied()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true when no guild has a log channel configured.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl FromIterator<(u64, u64)> for DestinationMap {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
