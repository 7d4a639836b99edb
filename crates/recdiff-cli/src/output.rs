use std::fmt::{self, Write};

use colored::Colorize;
use recdiff_core::Delta;
use recdiff_types::{Record, Value};

use crate::cli::OutputFormat;

/// How a delta is written to stdout.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

pub fn render(delta: &Delta, opts: RenderOptions) -> anyhow::Result<String> {
    match opts.format {
        OutputFormat::Json => {
            let mut out = if opts.pretty {
                serde_json::to_string_pretty(delta)?
            } else {
                serde_json::to_string(delta)?
            };
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(render_text(delta, opts.color)?),
    }
}

fn render_text(delta: &Delta, color: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match delta {
        Delta::Record(record) if !record.is_empty() => {
            let header = format!("{} field(s) changed", record.len());
            writeln!(out, "{}", paint_header(&header, color))?;
            record_lines("", record, color, &mut out)?;
        }
        Delta::Collection(entries) if !entries.is_empty() => {
            let header = format!("{} entry(ies) changed or added", entries.len());
            writeln!(out, "{}", paint_header(&header, color))?;
            for (i, entry) in entries.iter().enumerate() {
                writeln!(out, "  [{i}] {}", paint_value(entry, color))?;
            }
        }
        _ => out.push_str("No changes.\n"),
    }
    Ok(out)
}

// Nested changes print as dotted paths, one leaf per line.
fn record_lines(prefix: &str, record: &Record, color: bool, out: &mut String) -> fmt::Result {
    for (field, value) in record {
        let path = if prefix.is_empty() {
            field.clone()
        } else {
            format!("{prefix}.{field}")
        };
        match value {
            Value::Record(nested) if !nested.is_empty() => record_lines(&path, nested, color, out)?,
            leaf => {
                let path = if color { path.yellow().to_string() } else { path };
                writeln!(out, "  {path} = {}", paint_value(leaf, color))?;
            }
        }
    }
    Ok(())
}

fn paint_header(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn paint_value(value: &Value, color: bool) -> String {
    let text = value.to_json_string();
    if color {
        text.green().to_string()
    } else {
        text
    }
}
