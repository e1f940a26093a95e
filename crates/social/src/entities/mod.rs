//! Domain entities.

pub mod message;
pub mod user;

pub use message::{Message, MessageId};
pub use user::{User, UserId, UserStats, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};
