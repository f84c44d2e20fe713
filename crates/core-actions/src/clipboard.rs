//! Clipboard collaborator.
//!
//! The system clipboard is a shared resource that must be opened before use
//! and closed on every exit path. `OpenClipboard` is the scoped handle: it
//! opens on `acquire` and closes on drop, so early returns cannot leak it.

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard is not open")]
    NotOpen,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Platform clipboard access.
pub trait Clipboard {
    fn open(&mut self) -> Result<(), ClipboardError>;
    fn close(&mut self);
    /// Text content, if the clipboard currently holds text.
    fn read_text(&mut self) -> Option<String>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Scoped open clipboard; closes the underlying clipboard when dropped.
pub struct OpenClipboard<'a> {
    inner: &'a mut dyn Clipboard,
}

impl<'a> OpenClipboard<'a> {
    pub fn acquire(clipboard: &'a mut dyn Clipboard) -> Result<Self, ClipboardError> {
        clipboard.open()?;
        trace!(target: "actions.clipboard", "open");
        Ok(Self { inner: clipboard })
    }

    pub fn read_text(&mut self) -> Option<String> {
        self.inner.read_text()
    }

    pub fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.write_text(text)
    }
}

impl Drop for OpenClipboard<'_> {
    fn drop(&mut self) {
        self.inner.close();
        trace!(target: "actions.clipboard", "close");
    }
}

impl std::fmt::Debug for OpenClipboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenClipboard").finish_non_exhaustive()
    }
}

/// Process-local clipboard. Also records open/close calls so callers can
/// verify the handle is always released.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    is_open: bool,
    unavailable: bool,
    pub opens: usize,
    pub closes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            ..Self::default()
        }
    }

    /// A clipboard that always refuses to open.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl Clipboard for MemoryClipboard {
    fn open(&mut self) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::Unavailable("no clipboard owner".into()));
        }
        self.is_open = true;
        self.opens += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.is_open = false;
        self.closes += 1;
    }

    fn read_text(&mut self) -> Option<String> {
        if !self.is_open {
            return None;
        }
        self.contents.clone()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_open {
            return Err(ClipboardError::NotOpen);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_closes_on_drop() {
        let mut cb = MemoryClipboard::with_text("x");
        {
            let mut open = OpenClipboard::acquire(&mut cb).unwrap();
            assert_eq!(open.read_text().as_deref(), Some("x"));
        }
        assert!(!cb.is_open());
        assert_eq!((cb.opens, cb.closes), (1, 1));
    }

    #[test]
    fn unavailable_clipboard_never_opens() {
        let mut cb = MemoryClipboard::unavailable();
        assert!(matches!(
            OpenClipboard::acquire(&mut cb),
            Err(ClipboardError::Unavailable(_))
        ));
        assert_eq!(cb.closes, 0);
    }

    #[test]
    fn closed_clipboard_rejects_io() {
        let mut cb = MemoryClipboard::new();
        assert!(cb.read_text().is_none());
        assert!(matches!(cb.write_text("a"), Err(ClipboardError::NotOpen)));
    }
}
