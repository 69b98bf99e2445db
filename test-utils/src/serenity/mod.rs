//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway would deliver for a message with attachments.
//!
//! # Available Factories
//!
//! - `attachment::create_test_attachment` - Create Serenity Attachment objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod attachment;
pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use attachment::create_test_attachment;
pub use message::create_test_message;
pub use user::create_test_user;
