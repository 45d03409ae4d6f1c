//! Page cursor: the pure state machine behind fetch-based pagination.
//!
//! The cursor tracks pagination progress and legal transitions only; issuing
//! requests and interpreting payloads is the pagination client's job. At most
//! one fetch is in flight per cursor — `activate` hands out a fetch exactly
//! once until the matching completion arrives.

use serde::{Deserialize, Serialize};

/// Lifecycle of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorState {
    /// Ready for an activation.
    Idle,
    /// A fetch is in flight; further activations are ignored.
    Loading,
    /// Terminal: no further fetches are attempted.
    Exhausted,
}

/// Result of activating the pagination trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Ignored: a fetch is already in flight or the cursor is exhausted.
    Ignored,
    /// There is no next page; the cursor short-circuited to exhausted
    /// without issuing a request.
    NoMorePages,
    /// Issue a fetch for this page.
    Fetch { page: usize },
}

/// Tracks pagination progress for one paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    current_page: usize,
    max_page: usize,
    state: CursorState,
}

impl PageCursor {
    /// Create a cursor at `current_page` of `max_page` (both 1-based).
    #[must_use]
    pub fn new(current_page: usize, max_page: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            max_page: max_page.max(1),
            state: CursorState::Idle,
        }
    }

    /// Activate the trigger.
    ///
    /// Requires `Idle`: activations while `Loading` are ignored (this is the
    /// backpressure mechanism — there is no request queue). If the next page
    /// is past `max_page` the cursor short-circuits to exhausted and no
    /// request is issued.
    pub fn activate(&mut self) -> Activation {
        match self.state {
            CursorState::Loading | CursorState::Exhausted => Activation::Ignored,
            CursorState::Idle => {
                let next_page = self.current_page + 1;
                if next_page > self.max_page {
                    self.state = CursorState::Exhausted;
                    tracing::debug!(
                        current_page = self.current_page,
                        max_page = self.max_page,
                        "no next page, cursor exhausted"
                    );
                    return Activation::NoMorePages;
                }
                self.state = CursorState::Loading;
                Activation::Fetch { page: next_page }
            }
        }
    }

    /// A fetch for `page` returned content. Advances the cursor; returns
    /// `true` when the last page has now been served (cursor exhausted,
    /// trigger to be removed once the insertion animation settles).
    pub fn complete(&mut self, page: usize) -> bool {
        self.current_page = page;
        if page >= self.max_page {
            self.state = CursorState::Exhausted;
            tracing::debug!(page, max_page = self.max_page, "last page served");
            true
        } else {
            self.state = CursorState::Idle;
            false
        }
    }

    /// The server reported no more content. Terminal regardless of what the
    /// local `max_page` bookkeeping says — server-reported emptiness wins.
    pub fn terminate(&mut self) {
        self.state = CursorState::Exhausted;
    }

    /// A fetch failed in transport. Restores `Idle` with counters unchanged
    /// so a retry re-requests the same page.
    pub fn fail(&mut self) {
        if self.state == CursorState::Loading {
            self.state = CursorState::Idle;
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn max_page(&self) -> usize {
        self.max_page
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }
}
