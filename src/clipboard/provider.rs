//! The `get` / `set` pair the editor calls.

use super::traits::Clipboard;
use crate::codec::split;
use crate::config::ProviderConfig;
use crate::core::{Register, SelectionKind};
use crate::error::Result;

/// Connects a clipboard backend to the editor's register model.
///
/// # Examples
///
/// ```
/// use neoclip::clipboard::{MemoryClipboard, Provider};
/// use neoclip::config::{ProviderConfig, Separator};
/// use neoclip::{RegTag, Register, SelectionKind};
///
/// let config = ProviderConfig {
///     separator: Separator::Lf,
///     ..ProviderConfig::default()
/// };
/// let mut provider = Provider::new(MemoryClipboard::new(), config);
/// provider.set(&Register::from_lines(["a", "b"], RegTag::Char)).unwrap();
///
/// let reg = provider.get(SelectionKind::Auto).unwrap().unwrap();
/// assert_eq!(reg.lossy_lines(), ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct Provider<C: Clipboard> {
    clipboard: C,
    config: ProviderConfig,
}

impl<C: Clipboard> Provider<C> {
    /// Creates a provider over `clipboard`.
    #[must_use]
    pub const fn new(clipboard: C, config: ProviderConfig) -> Self {
        Self { clipboard, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The underlying backend.
    #[must_use]
    pub const fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Consumes the provider, returning the backend.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.clipboard
    }

    /// Reads the clipboard as a register.
    ///
    /// A register type carried in the payload takes precedence over
    /// `hint`; `hint` applies when the payload carries none. Returns
    /// `None` when the clipboard is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the payload framing is
    /// malformed. Malformed text is truncated, not reported.
    pub fn get(&mut self, hint: SelectionKind) -> Result<Option<Register>> {
        let Some(payload) = self.clipboard.read()? else {
            tracing::debug!("clipboard is empty");
            return Ok(None);
        };

        let framed = self.config.format.decode(&payload)?;
        let kind = if framed.kind.is_explicit() {
            framed.kind
        } else {
            hint
        };
        tracing::debug!(
            format = %self.config.format,
            bytes = payload.len(),
            kind = %kind,
            "reading clipboard"
        );

        Ok(split(framed.text, kind))
    }

    /// Writes a register to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    pub fn set(&mut self, register: &Register) -> Result<()> {
        let text = register.join(self.config.separator.as_bytes());
        let payload = self.config.format.encode(register.kind(), &text);
        tracing::debug!(
            format = %self.config.format,
            lines = register.len(),
            bytes = payload.len(),
            regtype = ?register.regtype(),
            "writing clipboard"
        );
        self.clipboard.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::codec::ClipboardFormat;
    use crate::config::Separator;
    use crate::core::RegTag;
    use crate::error::{CodecError, Error};

    fn provider(clip: MemoryClipboard, format: ClipboardFormat) -> Provider<MemoryClipboard> {
        Provider::new(
            clip,
            ProviderConfig {
                separator: Separator::Lf,
                format,
            },
        )
    }

    #[test]
    fn test_get_empty_clipboard() {
        let mut p = provider(MemoryClipboard::new(), ClipboardFormat::Text);
        assert!(p.get(SelectionKind::Auto).unwrap().is_none());
    }

    #[test]
    fn test_get_windows_style_text() {
        let clip = MemoryClipboard::with_content(&b"one\r\ntwo\r\n\0"[..]);
        let mut p = provider(clip, ClipboardFormat::Text);

        let reg = p.get(SelectionKind::Auto).unwrap().unwrap();
        assert_eq!(reg.lossy_lines(), ["one", "two", ""]);
        assert_eq!(reg.regtype(), RegTag::Line);
    }

    #[test]
    fn test_hint_applies_to_plain_text() {
        let clip = MemoryClipboard::with_content(&b"ab\ncd"[..]);
        let mut p = provider(clip, ClipboardFormat::Text);

        let reg = p.get(SelectionKind::Block).unwrap().unwrap();
        assert_eq!(reg.regtype(), RegTag::Block);
    }

    #[test]
    fn test_framed_kind_beats_hint() {
        let clip = MemoryClipboard::with_content(&b"\x01a"[..]);
        let mut p = provider(clip, ClipboardFormat::VimText);

        let reg = p.get(SelectionKind::Char).unwrap().unwrap();
        assert_eq!(reg.regtype(), RegTag::Line);
    }

    #[test]
    fn test_set_then_get_vimenc() {
        let mut p = provider(MemoryClipboard::new(), ClipboardFormat::VimEncText);
        let reg = Register::from_lines(["ab", "cd"], RegTag::Block);

        p.set(&reg).unwrap();
        assert_eq!(p.clipboard().content(), Some(&b"\x02utf-8\0ab\ncd"[..]));
        assert_eq!(p.get(SelectionKind::Auto).unwrap(), Some(reg));
    }

    #[test]
    fn test_set_uses_configured_separator() {
        let mut p = Provider::new(
            MemoryClipboard::new(),
            ProviderConfig {
                separator: Separator::CrLf,
                format: ClipboardFormat::Text,
            },
        );
        p.set(&Register::from_lines(["x", "y"], RegTag::Char)).unwrap();
        assert_eq!(p.into_inner().content(), Some(&b"x\r\ny"[..]));
    }

    #[test]
    fn test_bad_framing_is_an_error() {
        let clip = MemoryClipboard::with_content(&b"\x09junk"[..]);
        let mut p = provider(clip, ClipboardFormat::VimText);

        let err = p.get(SelectionKind::Auto).unwrap_err();
        assert!(matches!(
            err,
            Error::Codec(CodecError::UnknownMotion { byte: 9 })
        ));
    }
}
