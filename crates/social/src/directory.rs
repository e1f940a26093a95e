//! Immutable in-memory view of the social graph.
//!
//! A [`Directory`] is built once from a [`Snapshot`] exported by the
//! application server. Building it validates the snapshot and precomputes the
//! per-user counts, so page rendering never walks a collection to count it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::entities::{Message, MessageId, User, UserId, UserStats};
use crate::session::{SessionContext, Viewer};
use crate::types::{SocialError, SocialResult};
use crate::utils::Validator;

/// Directed "follower follows followee" edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub follower: UserId,
    pub followee: UserId,
}

/// "user has liked message" fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: UserId,
    pub message: MessageId,
}

/// Serialized form of the social graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub follows: Vec<Follow>,
    #[serde(default)]
    pub likes: Vec<Like>,
}

#[derive(Debug, Default)]
pub struct Directory {
    users: BTreeMap<UserId, User>,
    messages: HashMap<MessageId, Message>,
    authored: HashMap<UserId, Vec<MessageId>>,
    following: HashMap<UserId, BTreeSet<UserId>>,
    followers: HashMap<UserId, BTreeSet<UserId>>,
    likes: HashMap<UserId, HashSet<MessageId>>,
}

impl Directory {
    /// Read and validate a JSON snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> SocialResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SocialError::ReadSnapshot {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "parsed snapshot");
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> SocialResult<Self> {
        let Snapshot {
            users,
            messages,
            follows,
            likes,
        } = snapshot;

        let mut directory = Directory::default();
        let mut usernames = HashSet::new();
        let mut emails = HashSet::new();

        for user in users {
            Validator::user(&user)?;
            if !usernames.insert(user.username.clone()) {
                return Err(SocialError::UsernameTaken(user.username));
            }
            if !emails.insert(user.email.clone()) {
                return Err(SocialError::EmailTaken(user.email));
            }
            if directory.users.contains_key(&user.id) {
                return Err(SocialError::DuplicateUser(user.id));
            }
            directory.users.insert(user.id, user);
        }

        for message in messages {
            Validator::message(&message)?;
            if !directory.users.contains_key(&message.author) {
                return Err(SocialError::UserNotFound(message.author));
            }
            if directory.messages.contains_key(&message.id) {
                return Err(SocialError::DuplicateMessage(message.id));
            }
            directory
                .authored
                .entry(message.author)
                .or_default()
                .push(message.id);
            directory.messages.insert(message.id, message);
        }

        for Follow { follower, followee } in follows {
            if follower == followee {
                return Err(SocialError::SelfFollow(follower));
            }
            directory.require_user(follower)?;
            directory.require_user(followee)?;
            directory
                .following
                .entry(follower)
                .or_default()
                .insert(followee);
            directory
                .followers
                .entry(followee)
                .or_default()
                .insert(follower);
        }

        for Like { user, message } in likes {
            directory.require_user(user)?;
            if !directory.messages.contains_key(&message) {
                return Err(SocialError::MessageNotFound(message));
            }
            directory.likes.entry(user).or_default().insert(message);
        }

        let messages = &directory.messages;
        for ids in directory.authored.values_mut() {
            sort_newest_first(ids, messages);
        }

        directory.refresh_stats();

        info!(
            users = directory.users.len(),
            messages = directory.messages.len(),
            "social graph loaded"
        );
        Ok(directory)
    }

    fn require_user(&self, id: UserId) -> SocialResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(SocialError::UserNotFound(id))
        }
    }

    fn refresh_stats(&mut self) {
        let counts: Vec<(UserId, UserStats)> = self
            .users
            .keys()
            .map(|id| {
                let stats = UserStats {
                    messages: self.authored.get(id).map_or(0, Vec::len),
                    following: self.following.get(id).map_or(0, BTreeSet::len),
                    followers: self.followers.get(id).map_or(0, BTreeSet::len),
                    likes: self.likes.get(id).map_or(0, HashSet::len),
                };
                (*id, stats)
            })
            .collect();

        for (id, stats) in counts {
            if let Some(user) = self.users.get_mut(&id) {
                user.stats = stats;
            }
        }
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// All users ordered by username.
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// Users whose username contains `query`, ignoring case. A blank query
    /// matches everyone.
    pub fn search_users(&self, query: &str) -> Vec<&User> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.users();
        }

        self.users()
            .into_iter()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .collect()
    }

    /// Messages written by `user`, newest first.
    pub fn messages_by(&self, user: UserId) -> Vec<&Message> {
        self.authored
            .get(&user)
            .map(|ids| ids.iter().filter_map(|id| self.messages.get(id)).collect())
            .unwrap_or_default()
    }

    /// Users that `user` follows, ordered by username.
    pub fn following(&self, user: UserId) -> Vec<&User> {
        self.resolve_users(self.following.get(&user))
    }

    /// Users following `user`, ordered by username.
    pub fn followers(&self, user: UserId) -> Vec<&User> {
        self.resolve_users(self.followers.get(&user))
    }

    fn resolve_users(&self, ids: Option<&BTreeSet<UserId>>) -> Vec<&User> {
        let mut users: Vec<&User> = ids
            .into_iter()
            .flatten()
            .filter_map(|id| self.users.get(id))
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// Messages liked by `user`, newest first.
    pub fn liked_messages(&self, user: UserId) -> Vec<&Message> {
        let Some(liked) = self.likes.get(&user) else {
            return Vec::new();
        };
        let mut ids: Vec<MessageId> = liked.iter().copied().collect();
        sort_newest_first(&mut ids, &self.messages);
        ids.iter().filter_map(|id| self.messages.get(id)).collect()
    }

    /// Whether `follower` follows `followee`.
    pub fn is_following(&self, follower: UserId, followee: UserId) -> bool {
        self.following
            .get(&follower)
            .is_some_and(|set| set.contains(&followee))
    }

    /// Whether `user` is followed by `other`.
    pub fn is_followed_by(&self, user: UserId, other: UserId) -> bool {
        self.is_following(other, user)
    }

    pub fn has_liked(&self, user: UserId, message: MessageId) -> bool {
        self.likes
            .get(&user)
            .is_some_and(|set| set.contains(&message))
    }

    /// Build the session context for a request. Unknown ids yield an
    /// anonymous session.
    pub fn session_for(&self, viewer: Option<UserId>) -> SessionContext {
        match viewer.filter(|id| self.users.contains_key(id)) {
            Some(id) => SessionContext::signed_in(Viewer::new(
                id,
                self.following.get(&id).into_iter().flatten().copied(),
                self.likes.get(&id).into_iter().flatten().copied(),
            )),
            None => SessionContext::anonymous(),
        }
    }
}

fn sort_newest_first(ids: &mut [MessageId], messages: &HashMap<MessageId, Message>) {
    ids.sort_by(|a, b| {
        let a_time = messages.get(a).map(|m| m.timestamp);
        let b_time = messages.get(b).map(|m| m.timestamp);
        b_time.cmp(&a_time).then_with(|| b.cmp(a))
    });
}
