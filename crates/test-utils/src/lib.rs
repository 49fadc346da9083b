//! Shared test utilities for graphql-fields crates
//!
//! Builds resolver contexts straight from query text so tests can state
//! their input as GraphQL rather than hand-assembled selection trees.

pub mod assertions;

pub use assertions::{format_field_map, format_result};

use graphql_fields::{collect_requested_fields, FieldMap, FieldsOptions, ResolveInfo, VariableValues};
use graphql_fields_apollo_ext::{split_path, ResolveInfoBuilder};

/// Parse `source` and build the context of the resolver at `path`
/// (dot separated response keys).
///
/// Panics when the document does not parse or the path selects nothing.
#[must_use]
pub fn resolve_info(source: &str, path: &str) -> ResolveInfo {
    resolve_info_with_variables(source, path, &serde_json::json!({}))
}

/// Like [`resolve_info`], with variable values given as a JSON object.
#[must_use]
pub fn resolve_info_with_variables(source: &str, path: &str, variables: &serde_json::Value) -> ResolveInfo {
    let variables: VariableValues = variables
        .as_object()
        .cloned()
        .unwrap_or_else(|| panic!("variables must be a JSON object, got {variables}"));
    let tree = apollo_parser::Parser::new(source).parse();

    ResolveInfoBuilder::new(&tree)
        .variables(variables)
        .build(&split_path(path))
        .unwrap_or_else(|err| panic!("failed to resolve `{path}`: {err}"))
}

/// Requested fields at `path` with the given options, as JSON.
#[must_use]
pub fn fields_json(info: &ResolveInfo, options: &FieldsOptions) -> serde_json::Value {
    let fields = collect_requested_fields(info, FieldMap::new(), options)
        .unwrap_or_else(|err| panic!("failed to collect fields: {err}"));
    serde_json::to_value(&fields).unwrap_or_else(|err| panic!("failed to serialize fields: {err}"))
}
