//! Deletion Logger Test Utils
//!
//! Provides shared testing utilities for the deletion logger. The factories build
//! Serenity model objects by deserializing JSON shaped like Discord's gateway
//! payloads, so conversion code can be tested against real Serenity types without a
//! gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_attachment, create_test_message, create_test_user};
//!
//! let message = create_test_message(
//!     900,
//!     300,
//!     Some(100),
//!     create_test_user(42, "alice"),
//!     vec![create_test_attachment(1, "cat.png", Some("image/png"))],
//! );
//! ```

pub mod serenity;
