//! # Warbler Gateway Crate
//!
//! Read-only HTTP layer that assembles Warbler pages from a social graph
//! snapshot. Follow, like and delete forms in the rendered pages post to the
//! application server; this router never mutates anything.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use warbler_gateway::{build_router, GatewayState};
//! use warbler_social::Directory;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = Directory::load("warbler-snapshot.json")?;
//! let app = build_router(GatewayState::new(Arc::new(directory)));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ErrorNotice, GatewayError, GatewayResult};
pub use middleware::SessionUser;
pub use state::GatewayState;

use std::sync::Arc;

use axum::{middleware as axum_middleware, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// Create the page router
pub fn build_router(state: GatewayState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let arc_state = Arc::new(state);

    Router::new()
        .merge(routes::create_page_routes())
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::create_trace_middleware())
                .layer(axum_middleware::from_fn_with_state(
                    arc_state.clone(),
                    middleware::session_middleware,
                )),
        )
        .with_state(arc_state)
}
