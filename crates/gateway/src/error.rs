//! Error types for the gateway layer

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use warbler_social::{MessageId, SessionContext, UserId};
use warbler_views::pages::error_page;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("This page requires a signed-in user")]
    SessionRequired,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::UserNotFound(_)
            | GatewayError::MessageNotFound(_)
            | GatewayError::PageNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::SessionRequired => StatusCode::FOUND,
            GatewayError::InvalidConfiguration(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let GatewayError::SessionRequired = self {
            return (status, [(header::LOCATION, "/")]).into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        ErrorNotice {
            status,
            message: self.to_string(),
        }
        .render(&SessionContext::anonymous())
    }
}

/// Status and message of a rendered error page, kept in the response
/// extensions so the session middleware can redraw it for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorNotice {
    pub fn render(&self, session: &SessionContext) -> Response {
        let page = error_page(self.status.as_u16(), &self.message, session);
        let mut response = (self.status, Html(page.into_string())).into_response();
        response.extensions_mut().insert(self.clone());
        response
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
