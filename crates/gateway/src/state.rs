//! Shared application state for the gateway

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderName;
use warbler_social::{Directory, SessionContext, UserId};

use crate::error::{GatewayError, GatewayResult};

/// Header the upstream request handler uses to name the session user.
pub const DEFAULT_SESSION_HEADER: &str = "x-session-user";

/// Shared state handed to every page handler
#[derive(Clone)]
pub struct GatewayState {
    /// Read-only social graph snapshot
    pub directory: Arc<Directory>,
    /// Header carrying the session user's id
    pub session_header: HeaderName,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl GatewayState {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            session_header: HeaderName::from_static(DEFAULT_SESSION_HEADER),
            static_dir: PathBuf::from("static"),
        }
    }

    pub fn with_session_header(mut self, header: &str) -> GatewayResult<Self> {
        self.session_header = HeaderName::try_from(header).map_err(|error| {
            GatewayError::InvalidConfiguration(format!("session header {header:?}: {error}"))
        })?;
        Ok(self)
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn session_for(&self, viewer: Option<UserId>) -> SessionContext {
        self.directory.session_for(viewer)
    }
}
