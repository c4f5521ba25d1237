//! Core domain models for neoclip.
//!
//! Selection kinds, register tags and register payloads. These are pure
//! data types with no I/O dependencies.

pub mod kind;
pub mod register;

pub use kind::{CTRL_V, RegTag, SelectionKind};
pub use register::Register;
