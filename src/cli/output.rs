//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::codec::{Split, StopReason};
use crate::core::{RegTag, SelectionKind};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the result of a split.
#[must_use]
pub fn format_split(split: Option<&Split>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => split.map_or_else(
            || "Clipboard is empty.\n".to_string(),
            format_split_text,
        ),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SplitOutput {
                lines: Vec<String>,
                regtype: RegTag,
                stop: &'static str,
                valid_up_to: usize,
            }
            format_json(&split.map(|s| SplitOutput {
                lines: s.register.lossy_lines(),
                regtype: s.register.regtype(),
                stop: stop_name(s.stop),
                valid_up_to: s.valid_up_to,
            }))
        }
    }
}

fn format_split_text(split: &Split) -> String {
    let reg = &split.register;
    let mut output = String::new();
    let kind = reg.kind();
    let _ = writeln!(
        output,
        "Register: {} line{}, regtype {} ({kind})",
        reg.len(),
        if reg.len() == 1 { "" } else { "s" },
        escape(reg.regtype().as_str()),
    );

    let width = reg.len().to_string().len();
    for (i, line) in reg.lossy_lines().iter().enumerate() {
        let _ = writeln!(output, "{:>width$} | {}", i + 1, escape(line));
    }

    if split.stop.truncated() {
        let _ = writeln!(
            output,
            "Truncated at byte {}: {}",
            split.valid_up_to, split.stop
        );
    }
    output
}

/// Formats a regtype classification.
#[must_use]
pub fn format_kind(input: &str, kind: SelectionKind, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match kind.tag() {
            Some(tag) => format!("{kind} ({})\n", escape(tag.as_str())),
            None => format!("{kind}\n"),
        },
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct KindOutput<'a> {
                input: &'a str,
                kind: &'static str,
                regtype: Option<RegTag>,
                motion: u8,
            }
            format_json(&KindOutput {
                input,
                kind: kind.name(),
                regtype: kind.tag(),
                motion: kind.motion_byte(),
            })
        }
    }
}

/// Formats the result of writing joined bytes to a file.
#[must_use]
pub fn format_write_result(path: &Path, bytes: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Wrote {bytes} bytes to {}\n", path.display()),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct WriteOutput<'a> {
                path: &'a Path,
                bytes: usize,
            }
            format_json(&WriteOutput { path, bytes })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

const fn stop_name(stop: StopReason) -> &'static str {
    match stop {
        StopReason::Exhausted => "exhausted",
        StopReason::Nul => "nul",
        StopReason::UnexpectedContinuation => "unexpected_continuation",
        StopReason::IncompleteSequence => "incomplete_sequence",
        StopReason::InvalidOctet => "invalid_octet",
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

/// Escapes control characters so lines print on one row.
fn escape(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_control() && c != '\t' {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
