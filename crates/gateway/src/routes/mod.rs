//! Page routes

pub mod messages;
pub mod users;

use axum::Router;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{GatewayError, GatewayResult};
use crate::state::GatewayState;

/// Create all page routes
pub fn create_page_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .merge(users::create_user_routes())
        .merge(messages::create_message_routes())
}

/// Ids arrive as raw path segments so that non-numeric ones 404 like unknown ids.
pub(crate) fn parse_id<T: FromStr>(raw: &str, uri: &str) -> GatewayResult<T> {
    raw.parse()
        .map_err(|_| GatewayError::PageNotFound(uri.to_string()))
}
