//! CLI command implementations.

use crate::cli::output::{OutputFormat, format_kind, format_split, format_write_result};
use crate::cli::parser::{Cli, Commands};
use crate::codec::split_detailed;
use crate::config::{ProviderConfig, parse_format};
use crate::core::{Register, SelectionKind};
use crate::error::{CommandError, Result};
use crate::io::{read_input, write_file};
use serde::Deserialize;
use std::path::Path;

/// Executes the CLI command.
///
/// Returns the bytes to print on stdout.
///
/// # Errors
///
/// Returns an error if input cannot be read or parsed, or an argument is
/// invalid.
pub fn execute(cli: &Cli) -> Result<Vec<u8>> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Split {
            file,
            regtype,
            target,
        } => cmd_split(file.as_deref(), regtype, target, format),
        Commands::Join {
            file,
            separator,
            target,
            regtype,
            output,
        } => cmd_join(
            file.as_deref(),
            separator,
            target,
            regtype.as_deref(),
            output.as_deref(),
            format,
        ),
        Commands::Regtype { value } => Ok(cmd_regtype(value, format).into_bytes()),
    }
}

/// Parses a register type hint as given on the command line.
///
/// Accepts `auto`, the names `char`/`line`/`block`, and anything the
/// regtype classifier understands.
///
/// # Errors
///
/// Returns [`CommandError::InvalidArgument`] for unknown values.
pub fn parse_kind(value: &str) -> Result<SelectionKind> {
    let kind = match value.to_ascii_lowercase().as_str() {
        "auto" => return Ok(SelectionKind::Auto),
        "char" | "charwise" => SelectionKind::Char,
        "line" | "linewise" => SelectionKind::Line,
        "block" | "blockwise" => SelectionKind::Block,
        _ => SelectionKind::from_regtype(value),
    };
    if kind.is_explicit() {
        Ok(kind)
    } else {
        Err(CommandError::InvalidArgument(format!("unknown regtype: {value:?}")).into())
    }
}

fn cmd_split(
    file: Option<&Path>,
    regtype: &str,
    target: &str,
    format: OutputFormat,
) -> Result<Vec<u8>> {
    let hint = parse_kind(regtype)?;
    let target = parse_format(target)?;
    let payload = read_input(file)?;

    let framed = target.decode(&payload)?;
    let kind = if framed.kind.is_explicit() {
        framed.kind
    } else {
        hint
    };
    let split = split_detailed(framed.text, kind);

    Ok(format_split(split.as_ref(), format).into_bytes())
}

/// Input accepted by `join`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JoinInput {
    Register(Register),
    Lines(Vec<String>),
}

fn cmd_join(
    file: Option<&Path>,
    separator: &str,
    target: &str,
    regtype: Option<&str>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<Vec<u8>> {
    let config = ProviderConfig::from_args(separator, target)?;
    let override_kind = regtype.map(parse_kind).transpose()?;

    let input = read_input(file)?;
    let (lines, kind) = match serde_json::from_slice::<JoinInput>(&input)? {
        JoinInput::Register(reg) => {
            let kind = reg.kind();
            let (lines, _) = reg.into_parts();
            (lines, kind)
        }
        JoinInput::Lines(lines) => (
            lines.into_iter().map(String::into_bytes).collect(),
            SelectionKind::Auto,
        ),
    };
    let kind = override_kind.unwrap_or(kind);

    let text = crate::codec::join(&lines, config.separator.as_bytes());
    let payload = config.format.encode(kind, &text);
    tracing::debug!(
        lines = lines.len(),
        bytes = payload.len(),
        separator = %config.separator,
        target = %config.format,
        "joined register"
    );

    match output {
        Some(path) => {
            write_file(path, &payload)?;
            Ok(format_write_result(path, payload.len(), format).into_bytes())
        }
        None => Ok(payload),
    }
}

fn cmd_regtype(value: &str, format: OutputFormat) -> String {
    format_kind(value, SelectionKind::from_regtype(value), format)
}
