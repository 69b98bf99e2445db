use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue {
        /// Name of the environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// `LOG_CHANNELS` is not a JSON object of guild id to channel id.
    #[error("LOG_CHANNELS must be a JSON object mapping guild IDs to channel IDs: {0}")]
    InvalidLogChannels(#[source] serde_json::Error),

    /// A guild or channel id in `LOG_CHANNELS` is not a Discord snowflake.
    #[error("Invalid Discord ID '{0}' in LOG_CHANNELS")]
    InvalidId(String),
}
