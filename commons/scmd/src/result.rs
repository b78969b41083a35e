// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Error, Result};
use serde_json::Value;
use std::io::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key: value` lines.
    #[default]
    Text,
    /// Pretty printed json.
    Json,
    /// Single line json.
    Raw,
    /// Text on stdout, single line json on stderr.
    Both,
}

impl OutputFormat {
    pub fn from_flags(json: bool, raw: bool, both: bool) -> Self {
        if both {
            OutputFormat::Both
        } else if raw {
            OutputFormat::Raw
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Print the command result, or hand the error back to the caller.
pub fn print_action_result(format: OutputFormat, result: Result<Value>) -> Result<()> {
    let value = result?;
    write_action_result(
        format,
        &value,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

pub fn write_action_result<O, E>(
    format: OutputFormat,
    value: &Value,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    O: Write,
    E: Write,
{
    if value.is_null() {
        return Ok(());
    }
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_text(value))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        OutputFormat::Raw => writeln!(out, "{}", serde_json::to_string(value)?)?,
        OutputFormat::Both => {
            writeln!(out, "{}", format_text(value))?;
            writeln!(err, "{}", serde_json::to_string(value)?)?;
        }
    }
    Ok(())
}

pub fn print_action_error(format: OutputFormat, error: &Error) {
    // Nothing is left to report a failed write to.
    let _ = write_action_error(
        format,
        error,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
}

/// `ERROR: ..` goes to stdout under `Both`, so stderr only ever carries json.
pub fn write_action_error<O, E>(
    format: OutputFormat,
    error: &Error,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    O: Write,
    E: Write,
{
    match format {
        OutputFormat::Both => writeln!(out, "ERROR: {:#}", error)?,
        _ => writeln!(err, "ERROR: {:#}", error)?,
    }
    Ok(())
}

/// Objects become one `key: value` line per scalar field, in field order, with
/// `_` in keys written as a space. Nested objects are left to the json output.
/// Arrays become one line per element.
pub fn format_text(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, value)| !value.is_object())
            .map(|(key, value)| {
                format!("{}: {}", key.replace('_', " "), format_scalar(value))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items
            .iter()
            .map(format_scalar)
            .collect::<Vec<_>>()
            .join("\n"),
        value => format_scalar(value),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        value => value.to_string(),
    }
}
