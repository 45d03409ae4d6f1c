//! Word-boundary content splitting.

use crate::block::{ContentBlock, Segment, Trigger, TriggerKind};
use crate::error::{CoreError, Result};
use crate::markup::{strip_tags, tokenize};
use crate::settings::{DisplayMode, Settings};

/// Splits article text into a visible prefix and hidden segments.
///
/// Configuration is captured at construction; the splitter itself is
/// stateless and reusable across blocks.
#[derive(Debug, Clone)]
pub struct Splitter {
    threshold: usize,
    mode: DisplayMode,
    segment_size: usize,
}

impl Splitter {
    /// Create a splitter from the host settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            threshold: settings.word_threshold,
            mode: settings.display_mode,
            segment_size: settings.segment_size,
        }
    }

    /// Create a splitter from explicit parameters.
    #[must_use]
    pub fn with_params(threshold: usize, mode: DisplayMode, segment_size: usize) -> Self {
        Self {
            threshold,
            mode,
            segment_size,
        }
    }

    /// Split `text` into a content block.
    ///
    /// Tokenizes by whitespace after removing markup; word count is the
    /// token count. If the text has no more words than the threshold
    /// (equality included) the block is returned whole: no segments, no
    /// trigger.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSegmentSize`] if progressive mode is
    /// configured with a zero segment size and the text would be split.
    pub fn split(&self, id: impl Into<String>, text: &str) -> Result<ContentBlock> {
        let id = id.into();
        let tokens = tokenize(&strip_tags(text));
        let total_words = tokens.len();

        // Equality means no split
        if total_words <= self.threshold {
            tracing::debug!(
                block = %id,
                total_words,
                threshold = self.threshold,
                "content below threshold, leaving block whole"
            );
            return Ok(ContentBlock {
                id,
                visible: tokens,
                threshold: self.threshold,
                segment_size: self.segment_size,
                mode: self.mode,
                segments: Vec::new(),
                trigger: None,
            });
        }

        let visible = tokens[..self.threshold].to_vec();
        let remainder = &tokens[self.threshold..];

        let (segments, trigger) = match self.mode {
            DisplayMode::Single => {
                let segment = Segment::new(1, remainder.to_vec());
                (vec![segment], Trigger::new(TriggerKind::RevealAll, 1))
            }
            DisplayMode::Progressive => {
                if self.segment_size == 0 {
                    return Err(CoreError::InvalidSegmentSize(self.segment_size));
                }
                let segments: Vec<Segment> = remainder
                    .chunks(self.segment_size)
                    .enumerate()
                    .map(|(i, chunk)| Segment::new(i + 1, chunk.to_vec()))
                    .collect();
                let trigger = Trigger::new(TriggerKind::RevealNext, segments.len());
                (segments, trigger)
            }
        };

        tracing::debug!(
            block = %id,
            total_words,
            threshold = self.threshold,
            segments = segments.len(),
            mode = ?self.mode,
            "split content block"
        );

        Ok(ContentBlock {
            id,
            visible,
            threshold: self.threshold,
            segment_size: self.segment_size,
            mode: self.mode,
            segments,
            trigger: Some(trigger),
        })
    }
}
