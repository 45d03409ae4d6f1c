//! Reveal controller: the client-side state machine for `reveal-all` and
//! `reveal-next` triggers.
//!
//! Activation is the single mutation point. Animations never gate state: an
//! activation returns a [`RevealEffect`] describing what the host should
//! animate, and when (if ever) the trigger disappears. Because the counter is
//! advanced before the effect is handed out, rapid repeated activations
//! cannot skip or re-reveal a segment regardless of how long the host takes
//! to run the animation.

use std::time::Duration;

use crate::block::{ContentBlock, TriggerKind, TriggerState, Visibility};
use crate::payload::BlockPayload;
use crate::settings::Settings;

/// Effect of one trigger activation, applied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEffect {
    /// Animate the given segment into view over `animation`. When
    /// `remove_trigger` is set the trigger is removed once the animation
    /// settles — never before, so the final segment is seen appearing.
    Reveal {
        /// 1-based index of the segment to show.
        segment: usize,
        animation: Duration,
        remove_trigger: bool,
    },
    /// Nothing to do: duplicate or late activation, or a block that was
    /// never split.
    Noop,
}

/// Owns a [`ContentBlock`] for the life of a rendered view and serializes
/// its reveal transitions.
#[derive(Debug, Clone)]
pub struct RevealController {
    block: ContentBlock,
    animation: Duration,
}

impl RevealController {
    /// Take ownership of a block, with animation timing from the settings.
    #[must_use]
    pub fn new(block: ContentBlock, settings: &Settings) -> Self {
        Self {
            block,
            animation: settings.animation(),
        }
    }

    /// Reconstruct a controller from the serialized payload alone.
    ///
    /// A controller rebuilt this way behaves identically to the one the
    /// payload was taken from.
    pub fn from_payload(payload: &BlockPayload, settings: &Settings) -> crate::Result<Self> {
        Ok(Self::new(payload.to_block()?, settings))
    }

    /// Activate the block's trigger.
    ///
    /// `reveal-all` fires at most once and reveals the whole remainder.
    /// `reveal-next` reveals exactly the next hidden segment, in strict
    /// index order. Activations on an exhausted trigger are no-ops.
    pub fn activate(&mut self) -> RevealEffect {
        let animation = self.animation;
        let Some(trigger) = self.block.trigger.as_mut() else {
            return RevealEffect::Noop;
        };

        if trigger.state == TriggerState::Exhausted {
            return RevealEffect::Noop;
        }

        match trigger.kind {
            TriggerKind::RevealAll => {
                trigger.current_segment = trigger.total_segments;
                trigger.state = TriggerState::Exhausted;
                if let Some(segment) = self.block.segments.first_mut() {
                    segment.visibility = Visibility::Revealed;
                }
                tracing::debug!(block = %self.block.id, "revealed full remainder");
                RevealEffect::Reveal {
                    segment: 1,
                    animation,
                    remove_trigger: true,
                }
            }
            TriggerKind::RevealNext => {
                // Should be unreachable given the removal rule, but a late
                // or duplicate activation must not corrupt the counter.
                if trigger.current_segment >= trigger.total_segments {
                    trigger.state = TriggerState::Exhausted;
                    return RevealEffect::Noop;
                }

                trigger.current_segment += 1;
                let index = trigger.current_segment;
                let exhausted = index == trigger.total_segments;
                if exhausted {
                    trigger.state = TriggerState::Exhausted;
                }

                if let Some(segment) = self.block.segments.get_mut(index - 1) {
                    segment.visibility = Visibility::Revealed;
                }
                tracing::debug!(
                    block = %self.block.id,
                    segment = index,
                    total = self.block.segments.len(),
                    "revealed segment"
                );

                RevealEffect::Reveal {
                    segment: index,
                    animation,
                    remove_trigger: exhausted,
                }
            }
            // Pagination triggers are driven by the pagination client
            TriggerKind::FetchPage => RevealEffect::Noop,
        }
    }

    /// The owned block, reflecting all reveals so far.
    #[must_use]
    pub fn block(&self) -> &ContentBlock {
        &self.block
    }

    /// Whether the trigger has been removed (or never existed).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.block
            .trigger
            .as_ref()
            .is_none_or(|t| t.state == TriggerState::Exhausted)
    }
}
