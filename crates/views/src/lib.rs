//! # Warbler Views
//!
//! Pure functions from a snapshot of users and messages to HTML. Each view
//! takes the [`SessionContext`](warbler_social::SessionContext) explicitly and
//! never mutates anything; follow and like actions are emitted as POST forms
//! targeting the application server.
//!
//! - [`user_stats`]: message/following/followers/likes counters
//! - [`message_item`]: one message in a list, with its like toggle
//! - [`user_card`]: a user summary with its follow toggle
//! - [`pages`]: full documents composed from the above
//!
//! Text is escaped by `maud`, so usernames, bios and message bodies cannot
//! inject markup.

pub mod card;
pub mod controls;
pub mod message;
pub mod pages;
pub mod stats;

pub use card::user_card;
pub use controls::{FollowControl, LikeControl};
pub use message::{format_timestamp, message_item, message_list};
pub use stats::user_stats;

pub use maud::Markup;
