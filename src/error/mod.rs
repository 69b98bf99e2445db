//! Error types for the deletion logger.
//!
//! This module provides the application's error hierarchy. Each concern has its own
//! `thiserror` enum (configuration, attachment classification, remote fetches, log
//! channel delivery, internal conversions) and `AppError` aggregates them for the
//! startup path where any failure is fatal.
//!
//! Per-attachment errors (`FetchError`, `DeliveryError`) only pass through `AppError`
//! inside the deletion log service, which catches and reports them so sibling
//! attachments and the host process keep running. `AttachmentError` and
//! `InternalError` are handled where they occur and are never wrapped here.

pub mod attachment;
pub mod config;
pub mod delivery;
pub mod fetch;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, delivery::DeliveryError, fetch::FetchError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so startup code can use `?` freely.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Attachment bytes could not be retrieved.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Notification could not be delivered to the log channel.
    #[error(transparent)]
    DeliveryErr(#[from] DeliveryError),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
