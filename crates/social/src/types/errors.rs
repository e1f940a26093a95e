//! Error types for loading and validating the social graph.

use std::path::PathBuf;

use thiserror::Error;

use crate::entities::{MessageId, UserId};

/// Social graph errors
#[derive(Debug, Error)]
pub enum SocialError {
    #[error("Failed to read snapshot {path}: {source}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    ParseSnapshot(#[from] serde_json::Error),

    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    #[error("Invalid message data: {0}")]
    InvalidMessageData(String),

    #[error("Duplicate user id {0}")]
    DuplicateUser(UserId),

    #[error("Duplicate message id {0}")]
    DuplicateMessage(MessageId),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Email already taken: {0}")]
    EmailTaken(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("User {0} cannot follow themselves")]
    SelfFollow(UserId),
}

pub type SocialResult<T> = Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SocialError::UserNotFound(UserId(7)).to_string(),
            "User not found: 7"
        );
        assert_eq!(
            SocialError::SelfFollow(UserId(3)).to_string(),
            "User 3 cannot follow themselves"
        );
    }
}
