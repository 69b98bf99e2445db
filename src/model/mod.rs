//! Domain models for deletion logging.
//!
//! These types capture only the fields of Discord's message, author and attachment
//! objects that the deletion log pipeline reads. Serenity types are converted at the
//! bot handler boundary so the service layer never depends on the full SDK object shape.

pub mod attachment;
pub mod deletion;
pub mod destination;
pub mod notification;
