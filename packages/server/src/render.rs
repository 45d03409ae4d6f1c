//! Fragment rendering: the default post template.
//!
//! The rendered string is what travels in the `fragments` array of a page
//! response; the client treats it as opaque renderable content.

use std::fmt::Write as _;

use readmore_core::markup::escape_html;

use crate::content::Post;

/// Render one post to its listing fragment.
#[must_use]
pub fn render_post(post: &Post) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<article id="post-{slug}" class="readmore-post">"#,
        slug = escape_html(&post.slug)
    );

    let _ = write!(
        out,
        concat!(
            r#"<header class="entry-header">"#,
            r#"<h2 class="entry-title"><a href="{link}">{title}</a></h2>"#,
            r#"<div class="entry-meta">"#,
            r#"<span class="posted-on">{date}</span>"#,
            r#"<span class="byline"> by {author}</span>"#,
            r#"</div>"#,
            r#"</header>"#
        ),
        link = escape_html(&post.permalink),
        title = escape_html(&post.title),
        date = post.published.format("%B %-d, %Y"),
        author = escape_html(&post.author),
    );

    if let Some(thumbnail) = &post.thumbnail_url {
        let _ = write!(
            out,
            concat!(
                r#"<div class="post-thumbnail">"#,
                r#"<a href="{link}"><img src="{src}" alt="{title}"></a>"#,
                r#"</div>"#
            ),
            link = escape_html(&post.permalink),
            src = escape_html(thumbnail),
            title = escape_html(&post.title),
        );
    }

    let _ = write!(
        out,
        concat!(
            r#"<div class="entry-content">{excerpt}</div>"#,
            r#"<footer class="entry-footer">"#,
            r#"<a href="{link}" class="read-more">Read More</a>"#,
            r#"</footer>"#,
            r#"</article>"#
        ),
        excerpt = escape_html(&post.excerpt),
        link = escape_html(&post.permalink),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Post {
        Post {
            slug: "hello".to_string(),
            title: "Hello & Welcome".to_string(),
            author: "Ada".to_string(),
            published: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            excerpt: "An excerpt".to_string(),
            permalink: "https://example.com/hello".to_string(),
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_fragment_structure() {
        let html = render_post(&sample());
        assert!(html.starts_with(r#"<article id="post-hello""#));
        assert!(html.contains("Hello &amp; Welcome"));
        assert!(html.contains("June 3, 2025"));
        assert!(html.contains("by Ada"));
        assert!(html.contains(r#"class="read-more""#));
        assert!(html.ends_with("</article>"));
        assert!(!html.contains("post-thumbnail"));
    }

    #[test]
    fn test_thumbnail_rendered_when_present() {
        let mut post = sample();
        post.thumbnail_url = Some("https://example.com/x.jpg".to_string());
        let html = render_post(&post);
        assert!(html.contains("post-thumbnail"));
        assert!(html.contains(r#"src="https://example.com/x.jpg""#));
    }

    #[test]
    fn test_title_injection_is_escaped() {
        let mut post = sample();
        post.title = r#"<script>alert("x")</script>"#.to_string();
        let html = render_post(&post);
        assert!(!html.contains("<script>"));
    }
}
