//! Transient notification (toast) values.
//!
//! # Responsibility
//! - Carry the outcome message of the last user action to whatever surface
//!   renders it.
//!
//! # Invariants
//! - Notices are fire-and-forget: they auto-dismiss after [`TOAST_TTL`]
//!   and are never persisted.

use std::time::Duration;

/// How long a transient surface keeps a notice visible.
pub const TOAST_TTL: Duration = Duration::from_secs(2);

/// Visual variant of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient message about the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Display interval for auto-dismissing surfaces.
    pub ttl: Duration,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
            ttl: TOAST_TTL,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            ttl: TOAST_TTL,
        }
    }
}
