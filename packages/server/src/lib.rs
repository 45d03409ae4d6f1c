//! Readmore page fetch service.
//!
//! Serves the pagination contract the client consumes: `POST /load-more`
//! with `{page, pageSize, csrfToken}` answers either
//! `{ok:true, fragments, maxPage, currentPage}` or `{ok:false, message}`.
//! Content comes from a pluggable [`ContentSource`]; each served post is
//! rendered to an opaque HTML fragment.

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod render;
pub mod state;

pub use config::ServerConfig;
pub use content::{ContentSource, InMemorySource, Post};
pub use error::{Result, ServerError};
pub use render::render_post;
pub use state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/load-more", post(handlers::load_more))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
