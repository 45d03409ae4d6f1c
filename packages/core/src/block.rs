//! Core data types for split content blocks.

use serde::{Deserialize, Serialize};

use crate::settings::DisplayMode;

/// Visibility of a hidden-remainder segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Hidden,
    Revealed,
}

/// A contiguous chunk of a block's hidden word tokens, revealed as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 1-based position among the block's segments.
    pub index: usize,
    /// Word tokens, in document order.
    pub tokens: Vec<String>,
    pub visibility: Visibility,
}

impl Segment {
    /// Create a hidden segment.
    #[must_use]
    pub fn new(index: usize, tokens: Vec<String>) -> Self {
        Self {
            index,
            tokens,
            visibility: Visibility::Hidden,
        }
    }

    /// Words joined with single spaces, without the seam space.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }
}

/// What activating a trigger does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerKind {
    /// Reveal the whole hidden remainder at once.
    RevealAll,
    /// Reveal the next hidden segment.
    RevealNext,
    /// Fetch the next result page from the server.
    FetchPage,
}

/// Lifecycle of a trigger.
///
/// `Loading` only occurs for `fetch-page` triggers; local reveals have no
/// in-flight phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerState {
    Active,
    Loading,
    Exhausted,
}

/// The interactive control bound to one content block.
///
/// Pagination triggers track their counters on the
/// [`PageCursor`](crate::cursor::PageCursor) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub state: TriggerState,
    /// Index of the most recently revealed segment; 0 before any reveal.
    pub current_segment: usize,
    pub total_segments: usize,
}

impl Trigger {
    /// Create an active trigger with no segments revealed yet.
    #[must_use]
    pub fn new(kind: TriggerKind, total_segments: usize) -> Self {
        Self {
            kind,
            state: TriggerState::Active,
            current_segment: 0,
            total_segments,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == TriggerState::Exhausted
    }
}

/// A rendered view's worth of split content.
///
/// Constructed once per view by the splitter, serialized into the page, and
/// owned by the reveal controller until navigation discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Caller-supplied stable identifier (e.g. a post slug).
    pub id: String,
    /// Word tokens of the always-visible prefix.
    pub visible: Vec<String>,
    pub threshold: usize,
    pub segment_size: usize,
    pub mode: DisplayMode,
    /// Hidden remainder, partitioned exactly and contiguously. Empty when
    /// the block was not split.
    pub segments: Vec<Segment>,
    /// Absent when the block was not split.
    pub trigger: Option<Trigger>,
}

impl ContentBlock {
    /// Visible prefix joined with single spaces.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.visible.join(" ")
    }

    /// Total word count across prefix and segments.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.visible.len() + self.segments.iter().map(|s| s.tokens.len()).sum::<usize>()
    }

    /// Whether the splitter left this block untouched.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.trigger.is_some()
    }
}
