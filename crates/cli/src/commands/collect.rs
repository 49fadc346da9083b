use crate::commands::common::{fail, CommandContext};
use crate::{output, DocumentArgs, ExitCode, OutputFormat};
use anyhow::Result;
use graphql_fields::{collect_requested_fields, FieldMap};
use std::path::PathBuf;

#[tracing::instrument(skip_all, fields(document = %args.document.display(), path = %args.path))]
pub fn run(
    config_path: Option<PathBuf>,
    args: &DocumentArgs,
    exclude: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let context = CommandContext::load(config_path, &args.document);
    let info = context.resolve_info(args);
    let options = context.config.options(exclude);

    let fields = collect_requested_fields(&info, FieldMap::new(), &options)
        .unwrap_or_else(|e| fail(ExitCode::ResolutionError, e));

    tracing::debug!(fields = fields.len(), "Collected requested fields");
    println!("{}", output::render(&fields, format)?);
    Ok(())
}
