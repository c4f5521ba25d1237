//! Splitting raw clipboard bytes into register lines.
//!
//! The scan is a single left-to-right pass over the buffer. Lines end at LF
//! or CRLF. The first byte that cannot continue well-formed UTF-8 (or a NUL,
//! which Windows appends to clipboard text) ends the scan; whatever was read
//! up to that point becomes the last line and the rest is dropped. Malformed
//! input is therefore never an error.

use crate::core::{RegTag, Register, SelectionKind};
use crate::io::unicode::{Octet, classify_octet};
use std::fmt;

/// Why the scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every byte was consumed.
    Exhausted,
    /// A NUL byte was found.
    Nul,
    /// A continuation octet appeared where a code point should start.
    UnexpectedContinuation,
    /// A multi-byte sequence was interrupted or cut off by the end of input.
    IncompleteSequence,
    /// A byte in `0xF8..=0xFF`.
    InvalidOctet,
}

impl StopReason {
    /// Returns `true` if trailing bytes were dropped.
    #[must_use]
    pub const fn truncated(self) -> bool {
        !matches!(self, Self::Exhausted)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exhausted => "end of input",
            Self::Nul => "NUL byte",
            Self::UnexpectedContinuation => "unexpected continuation octet",
            Self::IncompleteSequence => "incomplete multi-byte sequence",
            Self::InvalidOctet => "invalid octet",
        })
    }
}

/// Result of [`split_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// The register built from the accepted bytes.
    pub register: Register,
    /// Why scanning ended.
    pub stop: StopReason,
    /// Length of the accepted prefix; everything from here on was dropped.
    pub valid_up_to: usize,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Normal,
    AfterCr,
    /// Inside a multi-byte sequence whose lead byte sits at `lead`.
    Continuation { remaining: u8, lead: usize },
}

/// Splits `data` into lines and decides the register type.
///
/// Returns `None` for empty input. An explicit `hint` sets the tag
/// directly; [`SelectionKind::Auto`] yields linewise when the text ends on
/// a line break and charwise otherwise.
///
/// # Examples
///
/// ```
/// use neoclip::{RegTag, SelectionKind, split};
///
/// let reg = split(b"foo\r\nbar\n\0", SelectionKind::Auto).unwrap();
/// assert_eq!(reg.lines(), [b"foo".to_vec(), b"bar".to_vec(), Vec::new()]);
/// assert_eq!(reg.regtype(), RegTag::Line);
/// ```
#[must_use]
pub fn split(data: &[u8], hint: SelectionKind) -> Option<Register> {
    split_detailed(data, hint).map(|s| s.register)
}

/// Like [`split`], but also reports where and why scanning stopped.
#[must_use]
pub fn split_detailed(data: &[u8], hint: SelectionKind) -> Option<Split> {
    if data.is_empty() {
        return None;
    }

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut state = ScanState::Normal;
    let mut stop = StopReason::Exhausted;
    let mut pos = 0;

    while pos < data.len() {
        let octet = classify_octet(data[pos]);
        state = match (state, octet) {
            // An interrupted sequence is cut back to its lead byte below,
            // so every emitted line stays well-formed.
            (ScanState::Continuation { remaining, lead }, octet) => {
                if octet != Octet::Continuation {
                    stop = StopReason::IncompleteSequence;
                    break;
                }
                if remaining > 1 {
                    ScanState::Continuation {
                        remaining: remaining - 1,
                        lead,
                    }
                } else {
                    ScanState::Normal
                }
            }
            (_, Octet::Nul) => {
                stop = StopReason::Nul;
                break;
            }
            (prev, Octet::LineFeed) => {
                let end = if matches!(prev, ScanState::AfterCr) {
                    pos - 1
                } else {
                    pos
                };
                lines.push(data[line_start..end].to_vec());
                line_start = pos + 1;
                ScanState::Normal
            }
            (_, Octet::CarriageReturn) => ScanState::AfterCr,
            (_, Octet::Ascii) => ScanState::Normal,
            (_, Octet::Continuation) => {
                stop = StopReason::UnexpectedContinuation;
                break;
            }
            (_, Octet::Lead(remaining)) => ScanState::Continuation {
                remaining,
                lead: pos,
            },
            (_, Octet::Invalid) => {
                stop = StopReason::InvalidOctet;
                break;
            }
        };
        pos += 1;
    }

    // A sequence that was begun but never finished is not part of the text.
    let end = match state {
        ScanState::Continuation { lead, .. } => {
            stop = StopReason::IncompleteSequence;
            lead
        }
        ScanState::Normal | ScanState::AfterCr => pos,
    };

    // Dropping a sequence that began the final line does not make it a
    // clean line break.
    let ends_on_break =
        end == line_start && !lines.is_empty() && stop != StopReason::IncompleteSequence;
    lines.push(data[line_start..end].to_vec());

    let regtype = hint.tag().unwrap_or(if ends_on_break {
        RegTag::Line
    } else {
        RegTag::Char
    });

    if stop.truncated() {
        tracing::debug!(
            offset = end,
            dropped = data.len() - end,
            reason = %stop,
            "clipboard data truncated"
        );
    }
    tracing::trace!(lines = lines.len(), regtype = ?regtype, hint = %hint, "split clipboard data");

    Some(Split {
        register: Register::new(lines, regtype),
        stop,
        valid_up_to: end,
    })
}
