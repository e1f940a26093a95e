//! # Warbler Social Crate
//!
//! Domain model for Warbler: users, messages, the follow graph and likes.
//! Everything here is read-only once loaded; mutation happens in the
//! application server that owns the persistent store.
//!
//! ## Architecture
//!
//! - **Entities**: `User`, `Message` and their identifiers
//! - **Session**: the viewing user and the relations the views consult
//! - **Directory**: an immutable in-memory snapshot of the social graph
//! - **Types**: error and result types
//! - **Utils**: snapshot validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warbler_social::{Directory, UserId};
//!
//! let directory = Directory::load("warbler-snapshot.json")?;
//! let session = directory.session_for(Some(UserId(1)));
//! # Ok::<(), warbler_social::SocialError>(())
//! ```

pub mod directory;
pub mod entities;
pub mod session;
pub mod types;
pub mod utils;

pub use directory::{Directory, Follow, Like, Snapshot};
pub use entities::{
    Message, MessageId, User, UserId, UserStats, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL,
};
pub use session::{SessionContext, Viewer};
pub use types::{SocialError, SocialResult};
