//! In-memory clipboard backend.

use super::traits::Clipboard;
use crate::error::Result;

/// Clipboard that keeps its payload in a buffer.
///
/// # Examples
///
/// ```
/// use neoclip::clipboard::{Clipboard, MemoryClipboard};
///
/// let mut clip = MemoryClipboard::new();
/// clip.write(b"text").unwrap();
/// assert_eq!(clip.read().unwrap().as_deref(), Some(&b"text"[..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    content: Option<Vec<u8>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard already holding `content`.
    #[must_use]
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// The stored payload, if any.
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.content.clone())
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.content = Some(data.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.content = None;
        Ok(())
    }
}
