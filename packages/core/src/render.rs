//! HTML emission for split blocks and pagination triggers.
//!
//! The emitted markup mirrors the wire payload: segment content and trigger
//! counters travel as `data-readmore-*` attributes, so a client working from
//! the document alone sees the same state as one handed the JSON payload.

use std::fmt::Write as _;

use crate::block::{ContentBlock, TriggerKind};
use crate::cursor::PageCursor;
use crate::markup::escape_html;
use crate::settings::{DisplayMode, Settings};

/// Render a content block to HTML.
///
/// Unsplit blocks render as their bare text. Split blocks get the wrapper,
/// the hidden segment elements (each carrying its seam space) and the
/// trigger button with its counters as data attributes.
#[must_use]
pub fn render_block(block: &ContentBlock, settings: &Settings) -> String {
    if !block.is_split() {
        return escape_html(&block.visible_text());
    }

    let mut out = String::new();
    let progressive = block.mode == DisplayMode::Progressive;

    if progressive {
        out.push_str(r#"<div class="readmore-wrapper readmore-progressive">"#);
    } else {
        out.push_str(r#"<div class="readmore-wrapper">"#);
    }

    let _ = write!(
        out,
        r#"<div class="readmore-visible">{}</div>"#,
        escape_html(&block.visible_text())
    );

    for segment in &block.segments {
        let style = if segment.is_hidden() {
            r#" style="display:none;""#
        } else {
            ""
        };
        if progressive {
            let _ = write!(
                out,
                r#"<div class="readmore-segment" data-readmore-segment="{}"{style}> {}</div>"#,
                segment.index,
                escape_html(&segment.text())
            );
        } else {
            let _ = write!(
                out,
                r#"<div class="readmore-hidden"{style}> {}</div>"#,
                escape_html(&segment.text())
            );
        }
    }

    if let Some(trigger) = &block.trigger {
        let _ = write!(
            out,
            r#"<div class="readmore-trigger align-{}">"#,
            settings.button_position.css_suffix()
        );
        match trigger.kind {
            TriggerKind::RevealAll => {
                let _ = write!(
                    out,
                    r#"<button class="readmore-btn readmore-btn-{}" data-readmore-kind="reveal-all">{}</button>"#,
                    settings.button_style.css_suffix(),
                    escape_html(&settings.button_text)
                );
            }
            TriggerKind::RevealNext => {
                let _ = write!(
                    out,
                    r#"<button class="readmore-btn readmore-btn-{}" data-readmore-kind="reveal-next" data-readmore-current-segment="{}" data-readmore-total-segments="{}">{}</button>"#,
                    settings.button_style.css_suffix(),
                    trigger.current_segment,
                    trigger.total_segments,
                    escape_html(&settings.button_text)
                );
            }
            TriggerKind::FetchPage => {}
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
    out
}

/// Render the pagination trigger for a listing.
///
/// Returns `None` when there is nothing to paginate (single page) — the
/// listing keeps whatever pagination it already had.
#[must_use]
pub fn render_pagination_trigger(cursor: &PageCursor, settings: &Settings) -> Option<String> {
    if cursor.max_page() <= 1 {
        return None;
    }

    Some(format!(
        concat!(
            r#"<div class="readmore-pagination align-{position}">"#,
            r#"<button class="readmore-btn readmore-btn-{style}" data-readmore-kind="fetch-page" "#,
            r#"data-readmore-page="{page}" data-readmore-max-pages="{max}">{label}</button>"#,
            r#"</div>"#
        ),
        position = settings.button_position.css_suffix(),
        style = settings.button_style.css_suffix(),
        page = cursor.current_page(),
        max = cursor.max_page(),
        label = escape_html(&settings.button_text),
    ))
}

/// Inline stylesheet for the configured custom CSS, if any.
#[must_use]
pub fn render_custom_css(settings: &Settings) -> Option<String> {
    if settings.custom_css.is_empty() {
        None
    } else {
        Some(format!("<style>{}</style>", settings.custom_css))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ButtonPosition, ButtonStyle};
    use crate::splitter::Splitter;

    fn text_of(words: usize) -> String {
        (0..words).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_unsplit_block_renders_bare_text() {
        let splitter = Splitter::with_params(10, DisplayMode::Single, 10);
        let block = splitter.split("b", "too short").unwrap();
        let html = render_block(&block, &Settings::default());
        assert_eq!(html, "too short");
    }

    #[test]
    fn test_single_mode_markup() {
        let splitter = Splitter::with_params(2, DisplayMode::Single, 100);
        let block = splitter.split("b", "a b c d").unwrap();
        let html = render_block(&block, &Settings::default());

        assert!(html.starts_with(r#"<div class="readmore-wrapper">"#));
        assert!(html.contains(r#"<div class="readmore-visible">a b</div>"#));
        // Hidden segment carries the seam space before its content
        assert!(html.contains(r#"<div class="readmore-hidden" style="display:none;"> c d</div>"#));
        assert!(html.contains(r#"data-readmore-kind="reveal-all""#));
        assert!(html.contains(">Load More</button>"));
    }

    #[test]
    fn test_progressive_mode_markup() {
        let splitter = Splitter::with_params(2, DisplayMode::Progressive, 2);
        let block = splitter.split("b", "a b c d e").unwrap();
        let html = render_block(&block, &Settings::default());

        assert!(html.contains("readmore-progressive"));
        assert!(html.contains(r#"data-readmore-segment="1""#));
        assert!(html.contains(r#"data-readmore-segment="2""#));
        assert!(html.contains(r#"data-readmore-current-segment="0""#));
        assert!(html.contains(r#"data-readmore-total-segments="2""#));
    }

    #[test]
    fn test_button_style_and_position_classes() {
        let settings = Settings {
            button_style: ButtonStyle::Outline,
            button_position: ButtonPosition::Right,
            ..Settings::default()
        };
        let splitter = Splitter::with_params(1, DisplayMode::Single, 100);
        let block = splitter.split("b", "a b c").unwrap();
        let html = render_block(&block, &settings);

        assert!(html.contains("readmore-btn-outline"));
        assert!(html.contains("align-right"));
    }

    #[test]
    fn test_content_is_escaped() {
        let settings = Settings {
            button_text: "More & more".to_string(),
            ..Settings::default()
        };
        let splitter = Splitter::with_params(1, DisplayMode::Single, 100);
        let block = splitter.split("b", "x <script>evil()</script> y").unwrap();
        let html = render_block(&block, &settings);

        // Tags were stripped at split time; remaining text is escaped
        assert!(!html.contains("<script>"));
        assert!(html.contains("More &amp; more"));
    }

    #[test]
    fn test_pagination_trigger_markup() {
        let cursor = PageCursor::new(1, 3);
        let html = render_pagination_trigger(&cursor, &Settings::default()).unwrap();

        assert!(html.contains(r#"data-readmore-kind="fetch-page""#));
        assert!(html.contains(r#"data-readmore-page="1""#));
        assert!(html.contains(r#"data-readmore-max-pages="3""#));
    }

    #[test]
    fn test_pagination_trigger_omitted_for_single_page() {
        let cursor = PageCursor::new(1, 1);
        assert!(render_pagination_trigger(&cursor, &Settings::default()).is_none());
    }

    #[test]
    fn test_custom_css() {
        assert!(render_custom_css(&Settings::default()).is_none());
        let settings = Settings {
            custom_css: ".readmore-btn { color: red; }".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            render_custom_css(&settings).unwrap(),
            "<style>.readmore-btn { color: red; }</style>"
        );
    }
}
