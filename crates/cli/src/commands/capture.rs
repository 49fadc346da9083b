use crate::commands::common::CommandContext;
use crate::DocumentArgs;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[tracing::instrument(skip_all, fields(document = %args.document.display(), path = %args.path))]
pub fn run(config_path: Option<PathBuf>, args: &DocumentArgs, pretty: bool) -> Result<()> {
    let context = CommandContext::load(config_path, &args.document);
    let info = context.resolve_info(args);

    let json = if pretty {
        serde_json::to_string_pretty(&info)
    } else {
        serde_json::to_string(&info)
    }
    .context("Failed to serialize resolver context")?;

    println!("{json}");
    Ok(())
}
