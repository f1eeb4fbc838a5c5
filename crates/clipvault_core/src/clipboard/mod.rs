//! System clipboard write boundary.
//!
//! # Responsibility
//! - Expose a narrow write-only clipboard contract to the service layer.
//! - Wrap the OS clipboard behind a trait so tests can substitute fakes.
//!
//! # Invariants
//! - Clipboard failures are reported as typed errors, never panics.

use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Clipboard-layer error.
#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard handle could be acquired (missing display, permissions).
    Unavailable(String),
    /// The write itself was rejected by the OS.
    WriteFailed(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "clipboard unavailable: {message}"),
            Self::WriteFailed(message) => write!(f, "clipboard write failed: {message}"),
        }
    }
}

impl Error for ClipboardError {}

/// Write-only clipboard contract used by the service layer.
pub trait ClipboardWriter {
    /// Replaces the system clipboard text.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// OS clipboard implementation backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Acquires a handle to the system clipboard.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|err| {
            error!("event=clipboard_init module=clipboard status=error error={err}");
            ClipboardError::Unavailable(err.to_string())
        })?;
        Ok(Self { inner })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_string()).map_err(|err| {
            error!("event=clipboard_write module=clipboard status=error error={err}");
            ClipboardError::WriteFailed(err.to_string())
        })
    }
}
