//! Clipboard backend trait.
//!
//! Backends move raw bytes and nothing else. Framing, splitting and
//! joining happen above them in [`Provider`](super::Provider).

use crate::error::Result;

/// Trait for clipboard backends.
///
/// Platform backends (X11 selections, Wayland data devices, the Win32
/// clipboard, `NSPasteboard`) live outside this crate; only an in-memory
/// backend ships with it.
pub trait Clipboard: Send {
    /// Reads the current clipboard payload.
    ///
    /// Returns `None` if the clipboard holds nothing this backend can read.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn read(&mut self) -> Result<Option<Vec<u8>>>;

    /// Replaces the clipboard payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Empties the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear.
    fn clear(&mut self) -> Result<()> {
        self.write(&[])
    }
}
