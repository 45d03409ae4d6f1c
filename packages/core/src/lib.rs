//! Readmore core - content splitting and progressive reveal.
//!
//! This crate provides the domain logic of the readmore toolkit: splitting
//! long article text at a word boundary, the client-side state machines that
//! progressively reveal the hidden remainder, and the serialized contract
//! between the two.
//!
//! # Example
//!
//! ```
//! use readmore_core::{RevealController, RevealEffect, Settings, Splitter};
//!
//! let settings = Settings::default();
//! let splitter = Splitter::new(&settings);
//! let text = (0..250).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
//!
//! let block = splitter.split("post-1", &text)?;
//! let mut controller = RevealController::new(block, &settings);
//! assert!(matches!(controller.activate(), RevealEffect::Reveal { segment: 1, .. }));
//! # Ok::<(), readmore_core::CoreError>(())
//! ```
//!
//! # Architecture
//!
//! - [`settings`]: recognized options, defaults and the host key-value store
//! - [`markup`]: tag stripping, tokenization and escaping
//! - [`block`]: core data types (ContentBlock, Segment, Trigger)
//! - [`splitter`]: word-boundary splitting
//! - [`reveal`]: reveal controller state machine
//! - [`cursor`]: page cursor state machine for fetch-based pagination
//! - [`payload`]: the serialized server-to-client contract
//! - [`render`]: HTML emission
//! - [`error`]: error types and Result alias

pub mod block;
pub mod cursor;
pub mod error;
pub mod markup;
pub mod payload;
pub mod render;
pub mod reveal;
pub mod settings;
pub mod splitter;

// Re-export commonly used items
pub use block::{ContentBlock, Segment, Trigger, TriggerKind, TriggerState, Visibility};
pub use cursor::{Activation, CursorState, PageCursor};
pub use error::{CoreError, Result};
pub use payload::{BlockPayload, SegmentPayload, TriggerPayload};
pub use render::{render_block, render_custom_css, render_pagination_trigger};
pub use reveal::{RevealController, RevealEffect};
pub use settings::{
    load_settings, AnimationSpeed, ButtonPosition, ButtonStyle, DisplayMode, MemoryStore,
    Settings, SettingsStore, SETTINGS_KEY,
};
pub use splitter::Splitter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
