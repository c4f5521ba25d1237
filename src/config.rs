//! Provider configuration.
//!
//! The line separator used when writing to the clipboard is platform
//! dependent and not decided by the codec. The CLI fills this in from its
//! arguments, which fall back to `NEOCLIP_SEPARATOR` and `NEOCLIP_TARGET`.

use crate::codec::ClipboardFormat;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Line separator written between register lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Any other byte string.
    Custom(Vec<u8>),
}

impl Separator {
    /// The separator the host platform's clipboard expects.
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    /// Separator bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
            Self::Custom(bytes) => bytes,
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::platform()
    }
}

impl FromStr for Separator {
    type Err = Error;

    /// Parses `lf`, `crlf`, `platform`, the escapes `\n` / `\r\n`, or any
    /// other non-empty literal.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Err(Error::Config {
                message: "separator must not be empty".to_string(),
            }),
            "platform" => Ok(Self::platform()),
            "\n" | "\\n" => Ok(Self::Lf),
            "\r\n" | "\\r\\n" => Ok(Self::CrLf),
            _ if s.eq_ignore_ascii_case("lf") => Ok(Self::Lf),
            _ if s.eq_ignore_ascii_case("crlf") => Ok(Self::CrLf),
            _ => Ok(Self::Custom(s.as_bytes().to_vec())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("lf"),
            Self::CrLf => f.write_str("crlf"),
            Self::Custom(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
        }
    }
}

/// Settings a [`Provider`](crate::clipboard::Provider) runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Separator used when writing registers.
    pub separator: Separator,
    /// Framing applied to clipboard payloads.
    pub format: ClipboardFormat,
}

impl ProviderConfig {
    /// Builds a configuration from command-line style strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either value is not recognized.
    pub fn from_args(separator: &str, format: &str) -> Result<Self> {
        Ok(Self {
            separator: separator.parse()?,
            format: parse_format(format)?,
        })
    }
}

/// Parses a clipboard format name.
///
/// # Errors
///
/// Returns [`Error::Config`] for unknown names.
pub fn parse_format(name: &str) -> Result<ClipboardFormat> {
    ClipboardFormat::parse(name).ok_or_else(|| Error::Config {
        message: format!("unknown clipboard format: {name} (expected text, vim or vimenc)"),
    })
}
