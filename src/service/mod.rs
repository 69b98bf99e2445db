//! Business logic for deletion logging.
//!
//! The `deletion_log` service orchestrates the pipeline. `fetch` and `delivery` define
//! the narrow seams it depends on (downloading attachment bytes and posting to a log
//! channel) together with their reqwest and Serenity implementations.

pub mod deletion_log;
pub mod delivery;
pub mod fetch;
