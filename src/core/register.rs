//! Register payloads exchanged with the editor.

use crate::codec::join;
use crate::core::kind::{RegTag, SelectionKind};
use serde::{Deserialize, Serialize};

/// An ordered list of lines plus the register type tag.
///
/// Lines are raw bytes with their terminators stripped. They are not
/// guaranteed to be valid UTF-8 in the strict sense (overlong forms pass
/// the splitter), so they are kept as bytes and only rendered lossily when
/// serialized.
///
/// # Examples
///
/// ```
/// use neoclip::{RegTag, Register};
///
/// let reg = Register::from_lines(["one", "two"], RegTag::Line);
/// assert_eq!(reg.len(), 2);
/// assert_eq!(reg.join(b"\n"), b"one\ntwo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RegisterRepr", into = "RegisterRepr")]
pub struct Register {
    lines: Vec<Vec<u8>>,
    regtype: RegTag,
}

impl Register {
    /// Creates a register from owned byte lines.
    #[must_use]
    pub const fn new(lines: Vec<Vec<u8>>, regtype: RegTag) -> Self {
        Self { lines, regtype }
    }

    /// Creates a register from anything that views as bytes.
    #[must_use]
    pub fn from_lines<I, L>(lines: I, regtype: RegTag) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self {
            lines: lines.into_iter().map(|l| l.as_ref().to_vec()).collect(),
            regtype,
        }
    }

    /// The lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// The register type tag.
    #[must_use]
    pub const fn regtype(&self) -> RegTag {
        self.regtype
    }

    /// The register type as a selection kind.
    #[must_use]
    pub fn kind(&self) -> SelectionKind {
        self.regtype.into()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines decoded as UTF-8, replacing anything invalid.
    #[must_use]
    pub fn lossy_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    /// Joins the lines with `sep` between them.
    #[must_use]
    pub fn join(&self, sep: &[u8]) -> Vec<u8> {
        join(&self.lines, sep)
    }

    /// Consumes the register, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vec<u8>>, RegTag) {
        (self.lines, self.regtype)
    }
}

/// JSON shape of a register: `{"lines": [...], "regtype": "v"}`.
#[derive(Serialize, Deserialize)]
struct RegisterRepr {
    lines: Vec<String>,
    regtype: RegTag,
}

impl From<RegisterRepr> for Register {
    fn from(repr: RegisterRepr) -> Self {
        Self {
            lines: repr.lines.into_iter().map(String::into_bytes).collect(),
            regtype: repr.regtype,
        }
    }
}

impl From<Register> for RegisterRepr {
    fn from(reg: Register) -> Self {
        Self {
            lines: reg.lossy_lines(),
            regtype: reg.regtype,
        }
    }
}
