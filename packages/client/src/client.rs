//! Pagination client: drives a [`PageCursor`] over a [`PageFetcher`] and
//! merges served fragments into the in-memory document.
//!
//! One client owns one cursor for the life of a rendered listing. At most
//! one fetch is in flight at a time: the cursor's loading state ignores
//! further activations, and the trigger view reflects the disabled/loading
//! presentation while a request runs. There is no request queue and no
//! automatic retry — a failed load restores the idle state and retry is
//! user-initiated.

use std::time::Duration;

use readmore_core::{Activation, PageCursor, Settings};

use crate::fetcher::{PageFetcher, PageRequest};
use crate::notice::Notice;

/// Result of one load-more activation, applied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Activation ignored (fetch already in flight, or cursor exhausted).
    Ignored,
    /// No further pages; show the notice and hide the trigger. No request
    /// was issued if the cursor short-circuited.
    NoMorePages(Notice),
    /// Fragments were appended. When `exhausted` is set the trigger is
    /// removed after the insertion animation completes.
    Appended {
        fragments: Vec<String>,
        exhausted: bool,
        animation: Duration,
    },
    /// Transport failure; show the notice, keep the trigger active so the
    /// user can retry the same page.
    Failed(Notice),
}

/// Presentation state of the pagination trigger button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

/// Client-side pagination driver.
pub struct PaginationClient<F: PageFetcher> {
    fetcher: F,
    cursor: PageCursor,
    page_size: usize,
    csrf_token: String,
    button_text: String,
    loading_text: String,
    animation: Duration,
    loaded: Vec<String>,
}

impl<F: PageFetcher> PaginationClient<F> {
    /// Create a client for one paginated listing.
    pub fn new(
        fetcher: F,
        cursor: PageCursor,
        settings: &Settings,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            cursor,
            page_size: settings.posts_per_page,
            csrf_token: csrf_token.into(),
            button_text: settings.button_text.clone(),
            loading_text: settings.loading_text.clone(),
            animation: settings.animation(),
            loaded: Vec::new(),
        }
    }

    /// Activate the trigger: fetch and merge the next page.
    ///
    /// State transitions happen only here and only once per activation;
    /// completions are processed in issuance order because no second fetch
    /// starts while one is in flight.
    pub async fn load_next(&mut self) -> LoadOutcome {
        let page = match self.cursor.activate() {
            Activation::Ignored => return LoadOutcome::Ignored,
            Activation::NoMorePages => {
                return LoadOutcome::NoMorePages(Notice::info("No more posts to load"));
            }
            Activation::Fetch { page } => page,
        };

        let request = PageRequest {
            page,
            page_size: self.page_size,
            csrf_token: self.csrf_token.clone(),
        };

        match self.fetcher.fetch(&request).await {
            Ok(response) if response.ok && !response.fragments.is_empty() => {
                if response.current_page != page {
                    tracing::warn!(
                        requested = page,
                        served = response.current_page,
                        "page fetch service served a different page than requested"
                    );
                }
                if response.max_page != self.cursor.max_page() {
                    tracing::warn!(
                        local = self.cursor.max_page(),
                        server = response.max_page,
                        "max page drift between client and service"
                    );
                }

                // Document order: after previously loaded content, before
                // the trigger
                self.loaded.extend(response.fragments.iter().cloned());
                let exhausted = self.cursor.complete(page);
                tracing::info!(
                    page,
                    fragments = response.fragments.len(),
                    exhausted,
                    "appended page"
                );
                LoadOutcome::Appended {
                    fragments: response.fragments,
                    exhausted,
                    animation: self.animation,
                }
            }
            Ok(response) => {
                // Empty or failure-flagged payload: the server's word beats
                // the local max-page bookkeeping
                self.cursor.terminate();
                let message = response
                    .message
                    .unwrap_or_else(|| "No more posts".to_string());
                tracing::info!(page, %message, "service reported no more content");
                LoadOutcome::NoMorePages(Notice::info(message))
            }
            Err(e) => {
                self.cursor.fail();
                tracing::warn!(page, error = %e, "page fetch failed");
                LoadOutcome::Failed(Notice::error("Error loading posts. Please try again."))
            }
        }
    }

    /// Current presentation of the trigger, or `None` once it is removed.
    pub fn trigger_view(&self) -> Option<TriggerView> {
        use readmore_core::CursorState;
        match self.cursor.state() {
            CursorState::Exhausted => None,
            CursorState::Loading => Some(TriggerView {
                label: self.loading_text.clone(),
                disabled: true,
                loading: true,
            }),
            CursorState::Idle => Some(TriggerView {
                label: self.button_text.clone(),
                disabled: false,
                loading: false,
            }),
        }
    }

    /// All fragments merged so far, in document order.
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }
}
