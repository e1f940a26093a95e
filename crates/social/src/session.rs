//! The viewing user attached to a request.

use std::collections::HashSet;

use crate::entities::{MessageId, UserId};

/// Snapshot of the signed-in user's outgoing relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    following: HashSet<UserId>,
    likes: HashSet<MessageId>,
}

impl Viewer {
    pub fn new(
        id: UserId,
        following: impl IntoIterator<Item = UserId>,
        likes: impl IntoIterator<Item = MessageId>,
    ) -> Self {
        Self {
            id,
            following: following.into_iter().collect(),
            likes: likes.into_iter().collect(),
        }
    }

    pub fn follows(&self, user: UserId) -> bool {
        self.following.contains(&user)
    }

    pub fn has_liked(&self, message: MessageId) -> bool {
        self.likes.contains(&message)
    }
}

/// Who is looking at the page.
///
/// Built per request by whatever handles authentication upstream and passed
/// explicitly to every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    viewer: Option<Viewer>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { viewer: None }
    }

    pub fn signed_in(viewer: Viewer) -> Self {
        Self {
            viewer: Some(viewer),
        }
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_id(&self) -> Option<UserId> {
        self.viewer.as_ref().map(|viewer| viewer.id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.viewer.is_some()
    }

    /// Whether the session user is `user`.
    pub fn is(&self, user: UserId) -> bool {
        self.viewer_id() == Some(user)
    }

    /// False for anonymous sessions.
    pub fn follows(&self, user: UserId) -> bool {
        self.viewer.as_ref().is_some_and(|viewer| viewer.follows(user))
    }

    /// False for anonymous sessions.
    pub fn has_liked(&self, message: MessageId) -> bool {
        self.viewer
            .as_ref()
            .is_some_and(|viewer| viewer.has_liked(message))
    }
}
