//! Vim selection framing.
//!
//! On X11, Vim and Neovim offer two private selection targets besides plain
//! text. Both prefix the text with a motion byte so the register type
//! survives the trip through the clipboard:
//!
//! - `_VIM_TEXT`: `[motion][text]`
//! - `_VIMENC_TEXT`: `[motion][encoding][NUL][text]`
//!
//! Motion bytes are 0 (charwise), 1 (linewise), 2 (blockwise) and 255
//! (unknown).

use crate::core::SelectionKind;
use crate::error::CodecError;
use std::fmt;

/// Encoding name written into `_VIMENC_TEXT` payloads.
pub const VIMENC_ENCODING: &str = "utf-8";

/// Selection target a payload was read from or is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardFormat {
    /// Plain UTF-8 text, no register type.
    #[default]
    Text,
    /// `_VIM_TEXT`
    VimText,
    /// `_VIMENC_TEXT`
    VimEncText,
}

/// A decoded payload: the register kind it carried and the text bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unframed<'a> {
    /// Register kind stored in the payload; `Auto` for plain text.
    pub kind: SelectionKind,
    /// Text portion, still raw.
    pub text: &'a [u8],
}

impl ClipboardFormat {
    /// X11 target atom name.
    #[must_use]
    pub const fn target_name(self) -> &'static str {
        match self {
            Self::Text => "UTF8_STRING",
            Self::VimText => "_VIM_TEXT",
            Self::VimEncText => "_VIMENC_TEXT",
        }
    }

    /// Parses a format name as accepted on the command line.
    ///
    /// Accepts short names (`text`, `vim`, `vimenc`) and atom names, case
    /// insensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" | "utf8_string" => Some(Self::Text),
            "vim" | "_vim_text" => Some(Self::VimText),
            "vimenc" | "_vimenc_text" => Some(Self::VimEncText),
            _ => None,
        }
    }

    /// Strips the framing from `payload`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when a Vim payload is empty, carries an
    /// unknown motion byte, or (for `_VIMENC_TEXT`) has an unterminated or
    /// non-UTF-8 encoding name.
    ///
    /// # Examples
    ///
    /// ```
    /// use neoclip::{ClipboardFormat, SelectionKind};
    ///
    /// let framed = ClipboardFormat::VimEncText.decode(b"\x01utf-8\0a\nb").unwrap();
    /// assert_eq!(framed.kind, SelectionKind::Line);
    /// assert_eq!(framed.text, b"a\nb");
    /// ```
    pub fn decode(self, payload: &[u8]) -> Result<Unframed<'_>, CodecError> {
        if self == Self::Text {
            return Ok(Unframed {
                kind: SelectionKind::Auto,
                text: payload,
            });
        }

        let (&motion, rest) = payload.split_first().ok_or(CodecError::EmptyPayload {
            format: self.target_name(),
        })?;
        let kind = SelectionKind::from_motion_byte(motion)
            .ok_or(CodecError::UnknownMotion { byte: motion })?;

        let text = if self == Self::VimEncText {
            let nul = rest
                .iter()
                .position(|&b| b == 0)
                .ok_or(CodecError::MissingEncodingTerminator)?;
            let name = &rest[..nul];
            if !is_utf8_name(name) {
                return Err(CodecError::UnsupportedEncoding {
                    name: String::from_utf8_lossy(name).into_owned(),
                });
            }
            &rest[nul + 1..]
        } else {
            rest
        };

        Ok(Unframed { kind, text })
    }

    /// Wraps `text` in this format's framing.
    ///
    /// Plain text ignores `kind`.
    #[must_use]
    pub fn encode(self, kind: SelectionKind, text: &[u8]) -> Vec<u8> {
        match self {
            Self::Text => text.to_vec(),
            Self::VimText => {
                let mut out = Vec::with_capacity(1 + text.len());
                out.push(kind.motion_byte());
                out.extend_from_slice(text);
                out
            }
            Self::VimEncText => {
                let mut out = Vec::with_capacity(2 + VIMENC_ENCODING.len() + text.len());
                out.push(kind.motion_byte());
                out.extend_from_slice(VIMENC_ENCODING.as_bytes());
                out.push(0);
                out.extend_from_slice(text);
                out
            }
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_name())
    }
}

fn is_utf8_name(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"utf-8") || name.eq_ignore_ascii_case(b"utf8")
}
