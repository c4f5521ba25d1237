//! CLI layer for neoclip.
//!
//! Provides the command-line interface using clap: splitting clipboard
//! dumps, joining registers, and classifying register types.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
