//! Message pages

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Extension, Router,
};
use warbler_social::MessageId;
use warbler_views::pages;

use crate::error::{GatewayError, GatewayResult};
use crate::middleware::SessionUser;
use crate::routes::parse_id;
use crate::state::GatewayState;

/// Create message routes
pub fn create_message_routes() -> Router<Arc<GatewayState>> {
    Router::new().route("/messages/:message_id", get(show_message))
}

pub async fn show_message(
    State(state): State<Arc<GatewayState>>,
    Extension(session): Extension<SessionUser>,
    Path(raw_id): Path<String>,
) -> GatewayResult<Html<String>> {
    let message_id: MessageId = parse_id(&raw_id, &format!("/messages/{raw_id}"))?;
    let message = state
        .directory
        .message(message_id)
        .ok_or(GatewayError::MessageNotFound(message_id))?;
    // Directory loading guarantees every message has a known author.
    let author = state.directory.user(message.author).ok_or_else(|| {
        GatewayError::InternalError(format!("message {message_id} has no author"))
    })?;
    let session = state.session_for(session.0);

    Ok(Html(
        pages::message_detail(message, author, &session).into_string(),
    ))
}
