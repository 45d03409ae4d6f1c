//! Content source: the queryable collection behind the page fetch service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One publishable item in a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier, also usable as a content block id.
    pub slug: String,
    pub title: String,
    pub author: String,
    pub published: NaiveDate,
    pub excerpt: String,
    pub permalink: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Queryable collection of posts, newest first.
///
/// The service re-runs this query per fetch, so implementations must be
/// stable for a given `(page, page_size)` pair — the contract requires
/// idempotent pages.
pub trait ContentSource: Send + Sync {
    /// The posts on `page` (1-based) at the given page size, newest first.
    /// Out-of-range pages yield an empty vector.
    fn page(&self, page: usize, page_size: usize) -> Vec<Post>;

    /// Inclusive upper page bound for the given page size, at least 1.
    fn max_page(&self, page_size: usize) -> usize;
}

/// In-memory content source. Posts are sorted newest-first on construction.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    posts: Vec<Post>,
}

impl InMemorySource {
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl ContentSource for InMemorySource {
    fn page(&self, page: usize, page_size: usize) -> Vec<Post> {
        if page == 0 || page_size == 0 {
            return Vec::new();
        }
        let start = (page - 1) * page_size;
        self.posts
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    }

    fn max_page(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.posts.len().div_ceil(page_size).max(1)
    }
}
