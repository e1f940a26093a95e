//! Session and logging middleware

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{warn, Level};
use warbler_social::UserId;

use crate::error::{ErrorNotice, GatewayError, GatewayResult};
use crate::state::GatewayState;

/// Session user id attached to every request, `None` when anonymous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionUser(pub Option<UserId>);

impl SessionUser {
    pub fn require(self) -> GatewayResult<UserId> {
        self.0.ok_or(GatewayError::SessionRequired)
    }
}

/// Resolve the session header into a [`SessionUser`] extension.
///
/// Authentication happens upstream; a missing, malformed or unknown id makes
/// the request anonymous. Error pages are redrawn with the signed-in
/// viewer's navigation.
pub async fn session_middleware(
    State(state): State<Arc<GatewayState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = session_user_from_headers(&state, request.headers());
    request.extensions_mut().insert(user);
    let response = next.run(request).await;
    let notice = response.extensions().get::<ErrorNotice>().cloned();

    match (user.0, notice) {
        (Some(viewer), Some(notice)) => notice.render(&state.session_for(Some(viewer))),
        _ => response,
    }
}

fn session_user_from_headers(state: &GatewayState, headers: &HeaderMap) -> SessionUser {
    let Some(raw) = headers.get(&state.session_header) else {
        return SessionUser(None);
    };

    let parsed = raw
        .to_str()
        .ok()
        .and_then(|value| value.parse::<UserId>().ok());

    match parsed {
        Some(id) if state.directory.user(id).is_some() => SessionUser(Some(id)),
        Some(id) => {
            warn!(user_id = %id, "session names an unknown user, treating as anonymous");
            SessionUser(None)
        }
        None => {
            warn!(header = %state.session_header, "malformed session header, treating as anonymous");
            SessionUser(None)
        }
    }
}

/// Create tracing middleware
pub fn create_trace_middleware(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
