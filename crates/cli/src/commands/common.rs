//! Shared plumbing for the subcommands: config discovery, variables and
//! resolver context construction.

use crate::{DocumentArgs, ExitCode};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use graphql_fields::{ResolveInfo, VariableValues};
use graphql_fields_apollo_ext::{split_path, ApolloExtError, ResolveInfoBuilder};
use graphql_fields_config::{find_config, load_config, FieldsConfig};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Print an error and exit with `code`.
pub fn fail(code: ExitCode, message: impl Display) -> ! {
    tracing::debug!(exit_code = code.code(), reason = %code, "Exiting");
    eprintln!("{} {message}", "✗".red());
    code.exit()
}

/// Settings shared by every subcommand.
pub struct CommandContext {
    pub config: FieldsConfig,
}

impl CommandContext {
    /// Load the explicit config, or the nearest one above `anchor`.
    ///
    /// Exits with [`ExitCode::ConfigError`] when the file cannot be used.
    pub fn load(config_path: Option<PathBuf>, anchor: &Path) -> Self {
        let config_path = match config_path {
            Some(path) => Some(path),
            None => find_config(&start_dir(anchor))
                .unwrap_or_else(|e| fail(ExitCode::ConfigError, e)),
        };

        let config = match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                load_config(&path).unwrap_or_else(|e| fail(ExitCode::ConfigError, e))
            }
            None => FieldsConfig::default(),
        };

        Self { config }
    }

    /// Build the context a resolver at `args.path` would receive.
    ///
    /// Exits with a matching [`ExitCode`] when the document cannot be read,
    /// parsed or walked.
    #[tracing::instrument(skip_all, fields(document = %args.document.display(), path = %args.path))]
    pub fn resolve_info(&self, args: &DocumentArgs) -> ResolveInfo {
        let source = fs::read_to_string(&args.document).unwrap_or_else(|e| {
            fail(
                ExitCode::IoError,
                format!("Failed to read {}: {e}", args.document.display()),
            )
        });

        let variables = read_variables(args.variables.as_deref(), args.variables_file.as_deref())
            .unwrap_or_else(|e| fail(ExitCode::ParseError, format!("{e:#}")));
        let variables = self.config.variables_with(variables);

        let tree = apollo_parser::Parser::new(&source).parse();
        let mut builder = ResolveInfoBuilder::new(&tree).variables(variables);
        if let Some(operation) = &args.operation {
            builder = builder.operation(operation.clone());
        }

        builder
            .build(&split_path(&args.path))
            .unwrap_or_else(|e| fail(exit_code_for(&e), e))
    }
}

fn exit_code_for(error: &ApolloExtError) -> ExitCode {
    match error {
        ApolloExtError::Syntax(_) => ExitCode::ParseError,
        _ => ExitCode::ResolutionError,
    }
}

/// Directory to start config discovery from.
fn start_dir(anchor: &Path) -> PathBuf {
    let dir = anchor
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

/// Read variable values from an inline JSON string or a JSON file.
pub fn read_variables(inline: Option<&str>, file: Option<&Path>) -> Result<VariableValues> {
    let json = match (inline, file) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(file)) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read variables file {}", file.display()))?,
        (None, None) => return Ok(VariableValues::new()),
    };

    let value: serde_json::Value =
        serde_json::from_str(&json).context("Variables are not valid JSON")?;
    match value {
        serde_json::Value::Object(variables) => Ok(variables),
        serde_json::Value::Null => Ok(VariableValues::new()),
        other => bail!("Variables must be a JSON object, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_variables() {
        let variables = read_variables(Some(r#"{"withPets": true}"#), None).unwrap();
        assert_eq!(variables["withPets"], json!(true));
    }

    #[test]
    fn test_variables_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.json");
        fs::write(&path, r#"{"first": 10}"#).unwrap();

        let variables = read_variables(None, Some(&path)).unwrap();
        assert_eq!(variables["first"], json!(10));
    }

    #[test]
    fn test_no_variables() {
        assert!(read_variables(None, None).unwrap().is_empty());
        assert!(read_variables(Some("null"), None).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_variables_are_rejected() {
        let error = read_variables(Some("[1, 2]"), None).unwrap_err();
        assert!(error.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let error = read_variables(Some("{withPets: true}"), None).unwrap_err();
        assert!(error.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_config_is_discovered_next_to_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".graphql-fields.yml"),
            "excludedFields:\n  - __typename\n",
        )
        .unwrap();
        let document = dir.path().join("query.graphql");

        let context = CommandContext::load(None, &document);
        assert_eq!(context.config.excluded_fields, vec!["__typename"]);
    }

    #[test]
    fn test_explicit_config_wins_over_discovery() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".graphql-fields.yml"), "excludedFields: [a]").unwrap();
        let explicit = dir.path().join("other.json");
        fs::write(&explicit, r#"{"excludedFields": ["b"]}"#).unwrap();

        let context = CommandContext::load(Some(explicit), &dir.path().join("query.graphql"));
        assert_eq!(context.config.excluded_fields, vec!["b"]);
    }

    #[test]
    fn test_resolve_info_merges_config_variables() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("query.graphql");
        fs::write(
            &document,
            "query Q($a: Boolean, $b: Boolean) { person { name @include(if: $a) age @include(if: $b) } }",
        )
        .unwrap();

        let context = CommandContext {
            config: FieldsConfig {
                excluded_fields: Vec::new(),
                variables: json!({ "a": true, "b": true }).as_object().cloned().unwrap(),
            },
        };
        let args = DocumentArgs {
            document,
            path: "person".to_string(),
            operation: None,
            variables: Some(r#"{"b": false}"#.to_string()),
            variables_file: None,
        };

        let info = context.resolve_info(&args);
        let fields = graphql_fields::requested_fields(&info).unwrap();
        assert_eq!(fields.paths(), vec!["name"]);
    }
}
