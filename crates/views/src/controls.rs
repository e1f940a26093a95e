//! Follow and like toggles.
//!
//! Each toggle is decided once per render into a two-variant enum and then
//! rendered as a single POST form.

use maud::{html, Markup, Render};
use warbler_social::{Message, MessageId, SessionContext, User, UserId};

/// Like toggle for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeControl {
    Add(MessageId),
    Remove(MessageId),
}

impl LikeControl {
    /// `None` for anonymous sessions and for the author's own messages.
    pub fn resolve(message: &Message, session: &SessionContext) -> Option<Self> {
        let viewer = session.viewer()?;
        if message.is_authored_by(viewer.id) {
            return None;
        }

        if viewer.has_liked(message.id) {
            Some(Self::Remove(message.id))
        } else {
            Some(Self::Add(message.id))
        }
    }

    pub fn action(&self) -> String {
        match self {
            Self::Add(id) => format!("/users/add_like/{id}"),
            Self::Remove(id) => format!("/users/remove_like/{id}"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add(_) => "Like",
            Self::Remove(_) => "Unlike",
        }
    }
}

impl Render for LikeControl {
    fn render(&self) -> Markup {
        let button_class = match self {
            Self::Add(_) => "btn btn-sm btn-secondary",
            Self::Remove(_) => "btn btn-sm btn-primary",
        };

        html! {
            form method="POST" action=(self.action()) class="messages-like" {
                button class=(button_class) aria-label=(self.label()) {
                    i class="fa fa-thumbs-up" {}
                }
            }
        }
    }
}

/// Follow toggle for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowControl {
    Follow(UserId),
    Unfollow(UserId),
}

impl FollowControl {
    /// `None` only for anonymous sessions. A viewer looking at their own card
    /// still gets a control; the follow endpoint decides what to do with it.
    pub fn resolve(subject: &User, session: &SessionContext) -> Option<Self> {
        let viewer = session.viewer()?;
        if viewer.follows(subject.id) {
            Some(Self::Unfollow(subject.id))
        } else {
            Some(Self::Follow(subject.id))
        }
    }

    pub fn action(&self) -> String {
        match self {
            Self::Follow(id) => format!("/users/follow/{id}"),
            Self::Unfollow(id) => format!("/users/stop-following/{id}"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Follow(_) => "Follow",
            Self::Unfollow(_) => "Unfollow",
        }
    }
}

impl Render for FollowControl {
    fn render(&self) -> Markup {
        let button_class = match self {
            Self::Follow(_) => "btn btn-outline-primary btn-sm",
            Self::Unfollow(_) => "btn btn-primary btn-sm",
        };

        html! {
            form method="POST" action=(self.action()) class="follow-toggle" {
                button class=(button_class) { (self.label()) }
            }
        }
    }
}
