//! Rendering of field maps for the terminal.

use colored::Colorize;
use graphql_fields::{FieldMap, FieldValue};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented selection tree with colors
    Tree,
    /// Dotted leaf paths, one per line
    Paths,
    /// Compact JSON for tooling
    Json,
    /// Indented JSON
    Pretty,
}

/// Render `fields` in the requested format.
pub fn render(fields: &FieldMap, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Tree => render_tree(fields),
        OutputFormat::Paths => fields.paths().join("\n"),
        OutputFormat::Json => serde_json::to_string(fields)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(fields)?,
    };
    Ok(rendered)
}

fn render_tree(fields: &FieldMap) -> String {
    if fields.is_empty() {
        return "(no fields)".dimmed().to_string();
    }
    let mut out = String::new();
    write_tree(fields, 0, &mut out);
    out.truncate(out.trim_end().len());
    out
}

fn write_tree(fields: &FieldMap, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (name, value) in fields {
        match value {
            FieldValue::Leaf => {
                let _ = writeln!(out, "{indent}{name}");
            }
            FieldValue::Nested(children) if children.is_empty() => {
                let _ = writeln!(out, "{indent}{} {}", name.cyan().bold(), "{}".dimmed());
            }
            FieldValue::Nested(children) => {
                let _ = writeln!(out, "{indent}{} {{", name.cyan().bold());
                write_tree(children, depth + 1, out);
                let _ = writeln!(out, "{indent}}}");
            }
        }
    }
}
