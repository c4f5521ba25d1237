//! # neoclip
//!
//! Clipboard marshalling for Neovim.
//!
//! Converts between the editor's registers (a list of lines plus a
//! one-character register type) and the flat byte buffers OS clipboards
//! hand out and accept.
//!
//! ## Features
//!
//! - **Permissive splitting**: LF/CRLF line breaks, UTF-8 structure checks,
//!   trailing NULs and broken sequences truncated instead of rejected
//! - **Register types**: `v`/`V`/Ctrl-V tags with linewise inference
//! - **Vim framing**: `_VIM_TEXT` and `_VIMENC_TEXT` payloads
//! - **Provider**: a `get`/`set` pair over any byte-level clipboard backend

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod clipboard;
pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{CodecError, Error, Result};

// Re-export core domain types
pub use core::{CTRL_V, RegTag, Register, SelectionKind};

// Re-export codec operations
pub use codec::{
    ClipboardFormat, Split, StopReason, Unframed, classify, join, split, split_detailed,
};

// Re-export provider types
pub use clipboard::{Clipboard, MemoryClipboard, Provider};
pub use config::{ProviderConfig, Separator};
