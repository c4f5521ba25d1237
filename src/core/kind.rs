//! Selection kinds and register type tags.
//!
//! [`SelectionKind`] is the internal four-way classification. [`RegTag`] is
//! the single character the editor's register model understands; it has no
//! "auto" value, so anything handed back to the editor is always decided.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ctrl-V, the blockwise register type character.
pub const CTRL_V: char = '\u{16}';

/// How a span of text is interpreted when pasted.
///
/// # Examples
///
/// ```
/// use neoclip::SelectionKind;
///
/// assert_eq!(SelectionKind::from_char('V'), SelectionKind::Line);
/// assert_eq!(SelectionKind::from_char('x'), SelectionKind::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionKind {
    /// Charwise: an inline run of text.
    Char,
    /// Linewise: whole lines.
    Line,
    /// Blockwise: a rectangular block.
    Block,
    /// Not specified; infer from content.
    #[default]
    Auto,
}

impl SelectionKind {
    /// Classifies a single mode character.
    ///
    /// `c`/`v` are charwise, `l`/`V` linewise, `b`/Ctrl-V blockwise.
    /// Every other character is [`SelectionKind::Auto`].
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        match ch {
            'c' | 'v' => Self::Char,
            'l' | 'V' => Self::Line,
            'b' | CTRL_V => Self::Block,
            _ => Self::Auto,
        }
    }

    /// Classifies a single mode byte. Same mapping as [`Self::from_char`].
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self::from_char(byte as char)
    }

    /// Classifies a regtype string by its first character.
    ///
    /// The editor reports blockwise registers with their width appended
    /// (`"\x165"`), so only the leading character matters. An empty string
    /// is [`SelectionKind::Auto`].
    #[must_use]
    pub fn from_regtype(regtype: &str) -> Self {
        regtype.chars().next().map_or(Self::Auto, Self::from_char)
    }

    /// Returns the register tag for an explicit kind, `None` for `Auto`.
    #[must_use]
    pub const fn tag(self) -> Option<RegTag> {
        match self {
            Self::Char => Some(RegTag::Char),
            Self::Line => Some(RegTag::Line),
            Self::Block => Some(RegTag::Block),
            Self::Auto => None,
        }
    }

    /// Motion type byte as stored in Vim selection payloads.
    #[must_use]
    pub const fn motion_byte(self) -> u8 {
        match self {
            Self::Char => 0,
            Self::Line => 1,
            Self::Block => 2,
            Self::Auto => 255,
        }
    }

    /// Parses a Vim motion type byte.
    #[must_use]
    pub const fn from_motion_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Char),
            1 => Some(Self::Line),
            2 => Some(Self::Block),
            255 => Some(Self::Auto),
            _ => None,
        }
    }

    /// Returns `true` unless this is [`SelectionKind::Auto`].
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        !matches!(self, Self::Auto)
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Line => "line",
            Self::Block => "block",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RegTag> for SelectionKind {
    fn from(tag: RegTag) -> Self {
        match tag {
            RegTag::Char => Self::Char,
            RegTag::Line => Self::Line,
            RegTag::Block => Self::Block,
        }
    }
}

/// Register type character exchanged with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegTag {
    /// `v`
    Char,
    /// `V`
    Line,
    /// Ctrl-V (`0x16`)
    Block,
}

impl RegTag {
    /// The tag character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Char => 'v',
            Self::Line => 'V',
            Self::Block => CTRL_V,
        }
    }

    /// The tag as a one-byte string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "v",
            Self::Line => "V",
            Self::Block => "\u{16}",
        }
    }

    /// Parses a regtype string; `None` if it classifies as `Auto`.
    #[must_use]
    pub fn from_regtype(regtype: &str) -> Option<Self> {
        SelectionKind::from_regtype(regtype).tag()
    }
}

impl fmt::Display for RegTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RegTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_regtype(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown regtype: {s:?}")))
    }
}
