//! User-facing notices surfaced next to the trigger.

use std::time::Duration;

/// How long an informational notice stays up before auto-dismissing.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Legitimate terminal condition ("no more results").
    Info,
    /// Retryable failure.
    Error,
}

/// A transient message the host shows near the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// The host removes the notice once this elapses.
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }
}
