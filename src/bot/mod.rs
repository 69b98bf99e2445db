//! Discord bot integration for deletion logging.
//!
//! The bot is initialized during startup and runs until the gateway connection is
//! closed. It keeps a per-channel message cache so that, when a message is deleted,
//! the cached copy still knows the author and the attachments it carried.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel information for the cache
//! - `GUILD_MESSAGES` - Receive message create and delete events in guilds
//! - `MESSAGE_CONTENT` - Receive attachments of messages that don't mention the bot
//!   (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
