//! User pages

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use tracing::debug;
use warbler_social::{Message, User, UserId};
use warbler_views::pages::{self, RelationKind};

use crate::error::{GatewayError, GatewayResult};
use crate::middleware::SessionUser;
use crate::routes::parse_id;
use crate::state::GatewayState;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
}

/// Create user routes
pub fn create_user_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/", get(list_users))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(show_user))
        .route("/users/:user_id/following", get(show_following))
        .route("/users/:user_id/followers", get(show_followers))
        .route("/users/:user_id/likes", get(show_likes))
}

fn parse_user_id(raw: &str) -> GatewayResult<UserId> {
    parse_id(raw, &format!("/users/{raw}"))
}

fn find_user(state: &GatewayState, id: UserId) -> GatewayResult<&User> {
    state
        .directory
        .user(id)
        .ok_or(GatewayError::UserNotFound(id))
}

/// Everyone, or the users whose handle matches `?q=`.
pub async fn list_users(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Query(params): Query<DirectoryQuery>,
) -> Html<String> {
    let session = state.session_for(session.0);
    let query = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let users = match query {
        Some(q) => state.directory.search_users(q),
        None => state.directory.users(),
    };
    debug!(query, matches = users.len(), "listing users");

    Html(pages::user_directory(&users, query, &session).into_string())
}

pub async fn show_user(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Path(raw_id): Path<String>,
) -> GatewayResult<Html<String>> {
    let user_id = parse_user_id(&raw_id)?;
    let user = find_user(&state, user_id)?;
    let session = state.session_for(session.0);
    let messages = state.directory.messages_by(user_id);

    Ok(Html(pages::profile(user, &messages, &session).into_string()))
}

pub async fn show_following(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Path(raw_id): Path<String>,
) -> GatewayResult<Html<String>> {
    relation_page(&state, session, &raw_id, RelationKind::Following)
}

pub async fn show_followers(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Path(raw_id): Path<String>,
) -> GatewayResult<Html<String>> {
    relation_page(&state, session, &raw_id, RelationKind::Followers)
}

fn relation_page(
    state: &GatewayState,
    session: SessionUser,
    raw_id: &str,
    kind: RelationKind,
) -> GatewayResult<Html<String>> {
    let viewer = session.require()?;
    let user_id = parse_user_id(raw_id)?;
    let user = find_user(state, user_id)?;
    let session = state.session_for(Some(viewer));

    let users = match kind {
        RelationKind::Following => state.directory.following(user_id),
        RelationKind::Followers => state.directory.followers(user_id),
    };

    Ok(Html(
        pages::relation_listing(user, kind, &users, &session).into_string(),
    ))
}

pub async fn show_likes(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Path(raw_id): Path<String>,
) -> GatewayResult<Html<String>> {
    let viewer = session.require()?;
    let user_id = parse_user_id(&raw_id)?;
    let user = find_user(&state, user_id)?;
    let session = state.session_for(Some(viewer));

    let liked: Vec<(&Message, &User)> = state
        .directory
        .liked_messages(user_id)
        .into_iter()
        .filter_map(|message| {
            state
                .directory
                .user(message.author)
                .map(|author| (message, author))
        })
        .collect();

    Ok(Html(
        pages::likes_listing(user, &liked, &session).into_string(),
    ))
}
