use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::user::UserId;

/// Primary key of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MessageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(MessageId)
    }
}

/// A short post authored by exactly one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Author's user id
    #[serde(alias = "user_id")]
    pub author: UserId,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

impl Message {
    pub fn new(
        id: MessageId,
        author: UserId,
        timestamp: DateTime<Utc>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author,
            timestamp,
            text: text.into(),
        }
    }

    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author == user
    }

    /// Detail page path.
    pub fn path(&self) -> String {
        format!("/messages/{}", self.id)
    }
}
