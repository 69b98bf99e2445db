//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

/// Presence shown under the bot's name in the member list.
const ACTIVITY: &str = "Logging files for you!";

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connected bot user and sets its presence activity.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "Successfully logged in as {} ({})",
        ready.user.tag(),
        ready.user.id
    );

    ctx.set_activity(Some(ActivityData::playing(ACTIVITY)));
}
