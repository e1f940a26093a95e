//! Validation utilities.

use crate::entities::{Message, User};
use crate::types::{SocialError, SocialResult};

/// Longest message body accepted, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 140;

/// Validation utilities
pub struct Validator;

impl Validator {
    /// Validate username
    pub fn username(username: &str) -> SocialResult<()> {
        if username.trim().is_empty() {
            return Err(SocialError::InvalidUserData(
                "Username cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate email
    pub fn email(email: &str) -> SocialResult<()> {
        if email.trim().is_empty() {
            return Err(SocialError::InvalidUserData(
                "Email cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn user(user: &User) -> SocialResult<()> {
        Self::username(&user.username)?;
        Self::email(&user.email)
    }

    /// Validate message content
    pub fn message(message: &Message) -> SocialResult<()> {
        if message.text.trim().is_empty() {
            return Err(SocialError::InvalidMessageData(format!(
                "Message {} has no text",
                message.id
            )));
        }

        let length = message.text.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(SocialError::InvalidMessageData(format!(
                "Message {} is {length} characters long (max {MAX_MESSAGE_LENGTH})",
                message.id
            )));
        }

        Ok(())
    }
}
