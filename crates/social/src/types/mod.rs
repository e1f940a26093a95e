//! Shared types.

pub mod errors;

pub use errors::{SocialError, SocialResult};
