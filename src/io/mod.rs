//! I/O utilities for neoclip.
//!
//! Byte-oriented file and stream reading for the CLI, plus the UTF-8
//! octet classification the splitter is built on.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, read_file, read_input, write_file, write_output};
pub use unicode::{Octet, classify_octet};
