//! HTTP handlers for the page fetch contract.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::render::render_post;
use crate::state::AppState;

/// Upper bound on the page size a request may ask for.
const MAX_PAGE_SIZE: usize = 100;

/// Request body for a page fetch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMoreRequest {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub csrf_token: String,
}

/// Page envelope: fragments on success, a generic message otherwise.
///
/// Failures are service-level (`ok:false`), not HTTP-level — transport
/// status codes stay 200 so the client can distinguish "the service said
/// no" from "the request never made it".
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoadMoreResponse {
    #[serde(rename_all = "camelCase")]
    Success {
        ok: bool,
        fragments: Vec<String>,
        max_page: usize,
        current_page: usize,
    },
    Failure { ok: bool, message: String },
}

impl LoadMoreResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            ok: false,
            message: message.into(),
        }
    }
}

/// Serve one result page.
///
/// Verifies the anti-forgery token before touching any content; a bad token
/// never yields partial data. The response echoes the page actually served
/// so clients can detect drift against their own bookkeeping. Responses are
/// idempotent per `(page, page_size)` pair.
pub async fn load_more(
    State(state): State<AppState>,
    Json(request): Json<LoadMoreRequest>,
) -> Json<LoadMoreResponse> {
    if request.csrf_token.is_empty() || request.csrf_token.as_str() != &*state.expected_token {
        tracing::warn!("page fetch rejected: invalid anti-forgery token");
        return Json(LoadMoreResponse::failure("Security check failed"));
    }

    let page = request.page.max(1);
    let page_size = request.page_size.clamp(1, MAX_PAGE_SIZE);

    let posts = state.source.page(page, page_size);
    if posts.is_empty() {
        tracing::debug!(page, page_size, "page beyond available content");
        return Json(LoadMoreResponse::failure("No more posts found"));
    }

    let fragments: Vec<String> = posts.iter().map(render_post).collect();
    let max_page = state.source.max_page(page_size);
    tracing::info!(page, page_size, fragments = fragments.len(), "served page");

    Json(LoadMoreResponse::Success {
        ok: true,
        fragments,
        max_page,
        current_page: page,
    })
}
