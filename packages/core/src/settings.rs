//! Settings and the host configuration store.
//!
//! The host platform persists options in an opaque key-value store. Settings
//! are read once, default-filled, sanitized, and then passed explicitly into
//! the splitter, renderer and pagination client at construction. Components
//! never look options up at use time.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::markup::strip_tags;

/// Key under which settings are persisted in the host store.
pub const SETTINGS_KEY: &str = "readmore_settings";

/// How a split block reveals its hidden remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One trigger reveals the whole remainder at once.
    Single,
    /// One trigger reveals fixed-size segments, one per activation.
    Progressive,
}

/// Animation timing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Fast,
    Normal,
    Slow,
}

impl AnimationSpeed {
    /// Duration of a reveal or insertion animation.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            AnimationSpeed::Fast => Duration::from_millis(200),
            AnimationSpeed::Normal => Duration::from_millis(400),
            AnimationSpeed::Slow => Duration::from_millis(600),
        }
    }
}

/// Predefined trigger button styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Default,
    Primary,
    Secondary,
    Outline,
    /// Styled entirely by the `custom_css` option.
    Custom,
}

impl ButtonStyle {
    /// CSS class suffix used in emitted markup.
    #[must_use]
    pub fn css_suffix(self) -> &'static str {
        match self {
            ButtonStyle::Default => "default",
            ButtonStyle::Primary => "primary",
            ButtonStyle::Secondary => "secondary",
            ButtonStyle::Outline => "outline",
            ButtonStyle::Custom => "custom",
        }
    }
}

/// Horizontal placement of the trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    Left,
    Center,
    Right,
}

impl ButtonPosition {
    /// CSS alignment class suffix used in emitted markup.
    #[must_use]
    pub fn css_suffix(self) -> &'static str {
        match self {
            ButtonPosition::Left => "left",
            ButtonPosition::Center => "center",
            ButtonPosition::Right => "right",
        }
    }
}

/// Recognized options with their documented defaults.
///
/// Absent or invalid values fall back per key, silently. This is never fatal:
/// a completely corrupt stored value yields the full default set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Word count shown before the first trigger. Zero hides everything
    /// behind the trigger.
    pub word_threshold: usize,
    /// Reveal mode for split content blocks.
    pub display_mode: DisplayMode,
    /// Words revealed per activation in progressive mode.
    pub segment_size: usize,
    /// Label on an active trigger.
    pub button_text: String,
    /// Label on a trigger while a fetch is in flight.
    pub loading_text: String,
    /// Visual style of the trigger button.
    pub button_style: ButtonStyle,
    /// Placement of the trigger button.
    pub button_position: ButtonPosition,
    /// Extra stylesheet rules emitted alongside the markup. Tags are
    /// stripped on write.
    pub custom_css: String,
    /// Timing preset for reveal and insertion animations.
    pub animation_speed: AnimationSpeed,
    /// Page size for fetch-based pagination.
    pub posts_per_page: usize,
    /// Whether listing pages replace their pagination with a fetch trigger.
    pub pagination_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_threshold: 100,
            display_mode: DisplayMode::Single,
            segment_size: 100,
            button_text: "Load More".to_string(),
            loading_text: "Loading...".to_string(),
            button_style: ButtonStyle::Default,
            button_position: ButtonPosition::Center,
            custom_css: String::new(),
            animation_speed: AnimationSpeed::Normal,
            posts_per_page: 10,
            pagination_enabled: true,
        }
    }
}

impl Settings {
    /// Build settings from a stored JSON value, falling back to the default
    /// per key for anything absent or malformed.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };

        fn field<T: for<'de> Deserialize<'de>>(
            map: &serde_json::Map<String, Value>,
            key: &str,
            default: T,
        ) -> T {
            map.get(key)
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or(default)
        }

        Self {
            word_threshold: field(map, "word_threshold", defaults.word_threshold),
            display_mode: field(map, "display_mode", defaults.display_mode),
            segment_size: field(map, "segment_size", defaults.segment_size),
            button_text: field(map, "button_text", defaults.button_text),
            loading_text: field(map, "loading_text", defaults.loading_text),
            button_style: field(map, "button_style", defaults.button_style),
            button_position: field(map, "button_position", defaults.button_position),
            custom_css: field(map, "custom_css", defaults.custom_css),
            animation_speed: field(map, "animation_speed", defaults.animation_speed),
            posts_per_page: field(map, "posts_per_page", defaults.posts_per_page),
            pagination_enabled: field(map, "pagination_enabled", defaults.pagination_enabled),
        }
    }

    /// Normalize values the way the settings form does on save.
    ///
    /// Counts that must be positive are raised to 1, free text is trimmed
    /// (empty labels fall back to their defaults) and tags are stripped from
    /// the custom stylesheet.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.segment_size = self.segment_size.max(1);
        self.posts_per_page = self.posts_per_page.max(1);

        self.button_text = self.button_text.trim().to_string();
        if self.button_text.is_empty() {
            self.button_text = defaults.button_text;
        }
        self.loading_text = self.loading_text.trim().to_string();
        if self.loading_text.is_empty() {
            self.loading_text = defaults.loading_text;
        }
        self.custom_css = strip_tags(&self.custom_css).trim().to_string();
        self
    }

    /// Animation duration derived from the configured speed.
    #[must_use]
    pub fn animation(&self) -> Duration {
        self.animation_speed.duration()
    }
}

/// Opaque key-value configuration store supplied by the host platform.
///
/// Values are JSON; keys are caller-chosen strings. The store has no other
/// semantics.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Persist `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);
}

/// In-memory store, used in tests and by hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

/// Load settings from the store, writing the defaults back on first read.
///
/// A present-but-corrupt value yields defaults without overwriting what is
/// stored; only a missing key is default-filled.
pub fn load_settings(store: &mut dyn SettingsStore) -> Settings {
    match store.get(SETTINGS_KEY) {
        Some(value) => Settings::from_value(&value).sanitized(),
        None => {
            let defaults = Settings::default();
            match serde_json::to_value(&defaults) {
                Ok(value) => store.set(SETTINGS_KEY, value),
                Err(e) => tracing::warn!(error = %e, "failed to serialize default settings"),
            }
            defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.word_threshold, 100);
        assert_eq!(s.display_mode, DisplayMode::Single);
        assert_eq!(s.segment_size, 100);
        assert_eq!(s.button_text, "Load More");
        assert_eq!(s.posts_per_page, 10);
        assert!(s.pagination_enabled);
    }

    #[test]
    fn test_animation_speed_durations() {
        assert_eq!(AnimationSpeed::Fast.duration(), Duration::from_millis(200));
        assert_eq!(AnimationSpeed::Normal.duration(), Duration::from_millis(400));
        assert_eq!(AnimationSpeed::Slow.duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_from_value_partial() {
        let s = Settings::from_value(&json!({
            "word_threshold": 50,
            "display_mode": "progressive",
            "segment_size": 25,
        }));
        assert_eq!(s.word_threshold, 50);
        assert_eq!(s.display_mode, DisplayMode::Progressive);
        assert_eq!(s.segment_size, 25);
        // Unspecified keys keep their defaults
        assert_eq!(s.button_text, "Load More");
        assert_eq!(s.animation_speed, AnimationSpeed::Normal);
    }

    #[test]
    fn test_from_value_invalid_keys_fall_back() {
        let s = Settings::from_value(&json!({
            "word_threshold": "not a number",
            "display_mode": "sideways",
            "animation_speed": "slow",
        }));
        assert_eq!(s.word_threshold, 100);
        assert_eq!(s.display_mode, DisplayMode::Single);
        assert_eq!(s.animation_speed, AnimationSpeed::Slow);
    }

    #[test]
    fn test_from_value_non_object() {
        assert_eq!(Settings::from_value(&json!("garbage")), Settings::default());
        assert_eq!(Settings::from_value(&json!(null)), Settings::default());
    }

    #[test]
    fn test_sanitized() {
        let s = Settings {
            segment_size: 0,
            posts_per_page: 0,
            button_text: "   ".to_string(),
            loading_text: "  Hold on  ".to_string(),
            custom_css: "<style>.readmore-btn { color: red; }</style>".to_string(),
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(s.segment_size, 1);
        assert_eq!(s.posts_per_page, 1);
        assert_eq!(s.button_text, "Load More");
        assert_eq!(s.loading_text, "Hold on");
        assert_eq!(s.custom_css, ".readmore-btn { color: red; }");
    }

    #[test]
    fn test_load_settings_fills_defaults_on_first_read() {
        let mut store = MemoryStore::new();
        assert!(store.get(SETTINGS_KEY).is_none());

        let s = load_settings(&mut store);
        assert_eq!(s, Settings::default());

        // Defaults were written back
        let stored = store.get(SETTINGS_KEY);
        assert!(stored.is_some());
    }

    #[test]
    fn test_load_settings_reads_existing() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, json!({"word_threshold": 7, "segment_size": 0}));

        let s = load_settings(&mut store);
        assert_eq!(s.word_threshold, 7);
        // Sanitization applies on read
        assert_eq!(s.segment_size, 1);
    }
}
