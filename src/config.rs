use dioxus_logger::tracing::Level;
use serde::Deserialize;
use std::{collections::HashMap, str::FromStr};

use crate::{
    error::{config::ConfigError, AppError},
    model::destination::DestinationMap,
    service::deletion_log::classify::ContentTypePolicy,
    util::parse::parse_u64_from_string,
};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MESSAGE_CACHE_SIZE: usize = 500;

pub struct Config {
    pub discord_bot_token: String,

    pub log_channels: DestinationMap,

    pub fetch_timeout_secs: u64,
    pub message_cache_size: usize,
    pub content_type_policy: ContentTypePolicy,
    pub log_level: Level,
}

/// Snowflake as written in `LOG_CHANNELS`, either `"123"` or `123`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            log_channels: parse_log_channels(&required("LOG_CHANNELS")?)?,
            fetch_timeout_secs: parse_optional(
                "FETCH_TIMEOUT_SECS",
                lookup("FETCH_TIMEOUT_SECS"),
                DEFAULT_FETCH_TIMEOUT_SECS,
            )?,
            message_cache_size: parse_optional(
                "MESSAGE_CACHE_SIZE",
                lookup("MESSAGE_CACHE_SIZE"),
                DEFAULT_MESSAGE_CACHE_SIZE,
            )?,
            content_type_policy: if parse_optional(
                "STRICT_CONTENT_TYPE",
                lookup("STRICT_CONTENT_TYPE"),
                false,
            )? {
                ContentTypePolicy::Strict
            } else {
                ContentTypePolicy::Lenient
            },
            log_level: parse_optional("LOG_LEVEL", lookup("LOG_LEVEL"), Level::INFO)?,
        })
    }
}

/// Parses `LOG_CHANNELS`, a JSON object of guild id to log channel id.
fn parse_log_channels(raw: &str) -> Result<DestinationMap, ConfigError> {
    let entries: HashMap<String, RawId> =
        serde_json::from_str(raw).map_err(ConfigError::InvalidLogChannels)?;

    entries
        .into_iter()
        .map(|(guild_id, channel_id)| -> Result<(u64, u64), ConfigError> {
            let channel_id = channel_id.into_string();
            let guild_id =
                parse_u64_from_string(&guild_id).map_err(|_| ConfigError::InvalidId(guild_id))?;
            let channel_id = parse_u64_from_string(&channel_id)
                .map_err(|_| ConfigError::InvalidId(channel_id))?;
            Ok((guild_id, channel_id))
        })
        .collect()
}

/// Parses an optional variable, falling back to `default` when unset or blank.
fn parse_optional<T: FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}
