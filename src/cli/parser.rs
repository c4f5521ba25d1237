//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// neoclip: inspect and produce Neovim clipboard payloads.
///
/// Splits raw clipboard dumps into registers and joins registers back
/// into clipboard bytes, the same way the clipboard provider does.
#[derive(Parser, Debug)]
#[command(name = "neoclip")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split clipboard bytes into a register.
    ///
    /// Reads FILE (or stdin), removes the selection framing and prints the
    /// resulting lines and register type.
    Split {
        /// Input file (`-` or omitted for stdin).
        file: Option<PathBuf>,

        /// Register type hint (auto, v, V, b, char, line, block).
        #[arg(short, long, default_value = "auto")]
        regtype: String,

        /// Selection target the bytes came from (text, vim, vimenc).
        #[arg(short, long, default_value = "text", env = "NEOCLIP_TARGET")]
        target: String,
    },

    /// Join a register into clipboard bytes.
    ///
    /// Reads a JSON register (`{"lines": [...], "regtype": "v"}`) or a
    /// bare JSON array of lines from FILE (or stdin).
    Join {
        /// Input file (`-` or omitted for stdin).
        file: Option<PathBuf>,

        /// Line separator (lf, crlf, platform, or a literal string).
        #[arg(short, long, default_value = "platform", env = "NEOCLIP_SEPARATOR")]
        separator: String,

        /// Selection target to frame the bytes for (text, vim, vimenc).
        #[arg(short, long, default_value = "text", env = "NEOCLIP_TARGET")]
        target: String,

        /// Override the register type of the input.
        #[arg(short, long)]
        regtype: Option<String>,

        /// Write bytes to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a register type string.
    Regtype {
        /// Register type (e.g. `v`, `V`, `b`, `l`, `c`).
        value: String,
    },
}
