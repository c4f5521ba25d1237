//! Conversion between registers and clipboard bytes.
//!
//! Three independent, stateless operations:
//!
//! - [`classify`]: a mode character to a [`SelectionKind`]
//! - [`split`]: raw clipboard bytes to a [`Register`](crate::Register)
//! - [`join`]: register lines to one buffer
//!
//! plus [`ClipboardFormat`] for payloads that carry the register type
//! inside them.

pub mod framing;
pub mod join;
pub mod split;

pub use framing::{ClipboardFormat, Unframed, VIMENC_ENCODING};
pub use join::join;
pub use split::{Split, StopReason, split, split_detailed};

use crate::core::SelectionKind;

/// Maps a register mode character to a selection kind.
///
/// `c`/`v` are charwise, `l`/`V` linewise, `b`/Ctrl-V blockwise, anything
/// else is [`SelectionKind::Auto`].
///
/// ```
/// use neoclip::{SelectionKind, classify};
///
/// assert_eq!(classify('\u{16}'), SelectionKind::Block);
/// ```
#[must_use]
pub const fn classify(ch: char) -> SelectionKind {
    SelectionKind::from_char(ch)
}
