//! Readmore pagination client.
//!
//! Client side of the fetch-based "load more" mode: a [`PaginationClient`]
//! owns a page cursor, issues fetches against the page fetch service and
//! merges served fragments into the in-memory document. The progressive
//! reveal modes never touch the network — they live in `readmore-core`;
//! only the pagination trigger performs I/O.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod notice;

pub use client::{LoadOutcome, PaginationClient, TriggerView};
pub use error::{ClientError, Result};
pub use fetcher::{HttpPageFetcher, PageFetcher, PageRequest, PageResponse};
pub use notice::{Notice, NoticeKind, NOTICE_DISMISS_AFTER};
