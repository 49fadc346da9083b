use crate::commands::common::{fail, CommandContext};
use crate::{output, ExitCode, OutputFormat};
use anyhow::Result;
use graphql_fields::{collect_requested_fields, FieldMap, ResolveInfo};
use std::fs;
use std::path::{Path, PathBuf};

#[tracing::instrument(skip_all, fields(info = %info_path.display()))]
pub fn run(
    config_path: Option<PathBuf>,
    info_path: &Path,
    exclude: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let context = CommandContext::load(config_path, info_path);

    let json = fs::read_to_string(info_path).unwrap_or_else(|e| {
        fail(
            ExitCode::IoError,
            format!("Failed to read {}: {e}", info_path.display()),
        )
    });
    let mut info: ResolveInfo = serde_json::from_str(&json).unwrap_or_else(|e| {
        fail(
            ExitCode::ParseError,
            format!("{} is not a captured resolver context: {e}", info_path.display()),
        )
    });
    tracing::debug!(
        field_nodes = info.field_nodes.len(),
        fragments = info.fragments.len(),
        "Loaded captured context"
    );

    // Captured variables win over configured ones
    info.variables = context.config.variables_with(info.variables);

    let options = context.config.options(exclude);
    let fields = collect_requested_fields(&info, FieldMap::new(), &options)
        .unwrap_or_else(|e| fail(ExitCode::ResolutionError, e));

    println!("{}", output::render(&fields, format)?);
    Ok(())
}
