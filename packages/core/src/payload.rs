//! Wire format for split content blocks.
//!
//! The payload is the one serialized boundary between the server-side
//! splitter and the client-side reveal controller: a client reconstructing
//! state from this payload alone reproduces identical subsequent behavior.

use serde::{Deserialize, Serialize};

use crate::block::{ContentBlock, Segment, Trigger, TriggerKind, TriggerState, Visibility};
use crate::error::{CoreError, Result};
use crate::markup::tokenize;
use crate::settings::DisplayMode;

/// Serialized segment: rendered content plus reveal bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPayload {
    /// 1-based index.
    pub index: usize,
    /// Rendered text, carrying the seam: one leading space so that
    /// concatenation with the preceding content never glues words together.
    pub content: String,
    pub hidden: bool,
}

/// Serialized trigger descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPayload {
    pub kind: TriggerKind,
    pub state: TriggerState,
    pub current_segment: usize,
    pub total_segments: usize,
}

/// Serialized form of a [`ContentBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPayload {
    pub id: String,
    /// Visible prefix, words joined with single spaces.
    pub visible: String,
    pub mode: DisplayMode,
    pub threshold: usize,
    pub segment_size: usize,
    #[serde(default)]
    pub segments: Vec<SegmentPayload>,
    #[serde(default)]
    pub trigger: Option<TriggerPayload>,
}

impl BlockPayload {
    /// Serialize a block.
    #[must_use]
    pub fn from_block(block: &ContentBlock) -> Self {
        Self {
            id: block.id.clone(),
            visible: block.visible_text(),
            mode: block.mode,
            threshold: block.threshold,
            segment_size: block.segment_size,
            segments: block
                .segments
                .iter()
                .map(|s| SegmentPayload {
                    index: s.index,
                    content: format!(" {}", s.text()),
                    hidden: s.is_hidden(),
                })
                .collect(),
            trigger: block.trigger.as_ref().map(|t| TriggerPayload {
                kind: t.kind,
                state: t.state,
                current_segment: t.current_segment,
                total_segments: t.total_segments,
            }),
        }
    }

    /// Reconstruct the block this payload was taken from.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPayload`] if segment indexes are not
    /// contiguous from 1, or the trigger counters disagree with the segment
    /// count.
    pub fn to_block(&self) -> Result<ContentBlock> {
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.index != i + 1 {
                return Err(CoreError::InvalidPayload(format!(
                    "segment index {} at position {}, expected {}",
                    segment.index,
                    i,
                    i + 1
                )));
            }
        }
        if let Some(trigger) = &self.trigger {
            if trigger.kind != TriggerKind::FetchPage
                && trigger.total_segments != self.segments.len()
            {
                return Err(CoreError::InvalidPayload(format!(
                    "trigger counts {} segments, payload has {}",
                    trigger.total_segments,
                    self.segments.len()
                )));
            }
        }

        Ok(ContentBlock {
            id: self.id.clone(),
            visible: tokenize(&self.visible),
            threshold: self.threshold,
            segment_size: self.segment_size,
            mode: self.mode,
            segments: self
                .segments
                .iter()
                .map(|s| Segment {
                    index: s.index,
                    tokens: tokenize(&s.content),
                    visibility: if s.hidden {
                        Visibility::Hidden
                    } else {
                        Visibility::Revealed
                    },
                })
                .collect(),
            trigger: self.trigger.as_ref().map(|t| Trigger {
                kind: t.kind,
                state: t.state,
                current_segment: t.current_segment,
                total_segments: t.total_segments,
            }),
        })
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
