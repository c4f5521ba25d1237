//! Clipboard provider layer.
//!
//! A [`Clipboard`] backend supplies and accepts raw bytes; [`Provider`]
//! turns them into registers and back using the codec.

pub mod memory;
pub mod provider;
pub mod traits;

pub use memory::MemoryClipboard;
pub use provider::Provider;
pub use traits::Clipboard;
