use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Avatar shown when a user never uploaded one.
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.svg";

/// Profile banner shown when a user never uploaded one.
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.svg";

/// Primary key of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

/// Represents a Warbler account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Handle, rendered as `@username`
    pub username: String,
    pub email: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default = "default_header_image_url")]
    pub header_image_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Relation counts, filled in by the directory.
    #[serde(default)]
    pub stats: UserStats,
}

/// Sizes of a user's collections at the time the snapshot was taken.
///
/// Views treat these as plain integers; a count the data layer did not
/// supply reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub messages: usize,
    #[serde(default)]
    pub following: usize,
    #[serde(default)]
    pub followers: usize,
    #[serde(default)]
    pub likes: usize,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

fn default_header_image_url() -> String {
    DEFAULT_HEADER_IMAGE_URL.to_string()
}

impl User {
    /// Create a user with default images and no profile details.
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            image_url: default_image_url(),
            header_image_url: default_header_image_url(),
            bio: None,
            location: None,
            stats: UserStats::default(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_header_image_url(mut self, url: impl Into<String>) -> Self {
        self.header_image_url = url.into();
        self
    }

    pub fn with_stats(mut self, stats: UserStats) -> Self {
        self.stats = stats;
        self
    }

    /// Bio text, ignoring blank values.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().map(str::trim).filter(|bio| !bio.is_empty())
    }

    /// Location text, ignoring blank values.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
    }

    /// Profile page path.
    pub fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}
