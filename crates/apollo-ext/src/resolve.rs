//! Build the context a resolver would see for a response path.
//!
//! A GraphQL executor hands each resolver the field nodes that share its
//! response key, together with the document's fragments and the coerced
//! variables. [`ResolveInfoBuilder`] reproduces that from a parsed document so
//! requested fields can be computed without running an executor.

use crate::error::{ApolloExtError, Result};
use crate::lower::{const_value_to_json, fragment_table, lower_selection_set, lower_value};
use crate::{DocumentExt, NameExt};
use apollo_parser::cst;
use apollo_parser::SyntaxTree;
use graphql_fields::{
    should_include, Directives, Field, FragmentTable, ResolveInfo, Selection, Selections,
    VariableValues,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Split a dotted response path (`viewer.users`) into its keys.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect()
}

pub struct ResolveInfoBuilder<'t> {
    tree: &'t SyntaxTree,
    operation: Option<String>,
    variables: VariableValues,
}

impl<'t> ResolveInfoBuilder<'t> {
    #[must_use]
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            operation: None,
            variables: VariableValues::new(),
        }
    }

    /// Select the operation by name. Without one, the document must contain
    /// exactly one operation.
    #[must_use]
    pub fn operation(mut self, name: impl Into<String>) -> Self {
        self.operation = Some(name.into());
        self
    }

    /// Variable values as a client would send them.
    #[must_use]
    pub fn variables(mut self, variables: VariableValues) -> Self {
        self.variables = variables;
        self
    }

    /// Resolve `path` (a list of response keys, starting below the operation
    /// root) to the field nodes a resolver at that path receives.
    #[tracing::instrument(skip_all, fields(operation = self.operation.as_deref(), depth = path.len()))]
    pub fn build<S: AsRef<str>>(self, path: &[S]) -> Result<ResolveInfo> {
        let errors: Vec<String> = self
            .tree
            .errors()
            .map(|e| e.message().to_string())
            .collect();
        if !errors.is_empty() {
            return Err(ApolloExtError::Syntax(errors));
        }
        if path.is_empty() {
            return Err(ApolloExtError::EmptyPath);
        }

        let operation = self.select_operation()?;
        let variables = coerce_variables(&operation, self.variables);
        let fragments = fragment_table(self.tree);
        let root = operation
            .selection_set()
            .map(|set| lower_selection_set(&set))
            .unwrap_or_default();

        let mut field_nodes: Vec<Field> = Vec::new();
        for (depth, key) in path.iter().enumerate() {
            let mut collector = FieldCollector::new(key.as_ref(), &fragments, &variables);
            if depth == 0 {
                collector.collect(&root)?;
            } else {
                for node in &field_nodes {
                    collector.collect(node.selections())?;
                }
            }

            if collector.found.is_empty() {
                let path = path[..=depth]
                    .iter()
                    .map(AsRef::<str>::as_ref)
                    .collect::<Vec<_>>()
                    .join(".");
                return Err(ApolloExtError::FieldNotFound { path });
            }
            tracing::trace!(key = key.as_ref(), nodes = collector.found.len(), "resolved path segment");
            field_nodes = collector.found;
        }

        Ok(ResolveInfo::new(field_nodes, fragments, variables))
    }

    fn select_operation(&self) -> Result<cst::OperationDefinition> {
        if let Some(name) = &self.operation {
            return self
                .tree
                .find_operation(name)
                .ok_or_else(|| ApolloExtError::OperationNotFound(name.clone()));
        }

        let mut operations = self.tree.operations();
        let first = operations.next().ok_or(ApolloExtError::NoOperation)?;
        match operations.count() {
            0 => Ok(first),
            rest => Err(ApolloExtError::AmbiguousOperation(rest + 1)),
        }
    }
}

/// Fill in default values for variables the caller did not provide.
fn coerce_variables(operation: &cst::OperationDefinition, provided: VariableValues) -> VariableValues {
    let mut variables = provided;
    let Some(definitions) = operation.variable_definitions() else {
        return variables;
    };

    for definition in definitions.variable_definitions() {
        let Some(name) = definition.name_text() else {
            continue;
        };
        if variables.contains_key(&name) {
            continue;
        }
        let default = definition
            .default_value()
            .and_then(|default| default.value())
            .and_then(|value| lower_value(&value));
        if let Some(default) = default {
            tracing::trace!(variable = %name, "applying default value");
            variables.insert(name, const_value_to_json(&default));
        }
    }
    variables
}

/// Collects the fields with a given response key, looking through inline
/// fragments and spreads. Each fragment is expanded at most once per
/// collection.
struct FieldCollector<'a> {
    key: &'a str,
    fragments: &'a FragmentTable,
    variables: &'a VariableValues,
    visited: HashSet<Arc<str>>,
    found: Vec<Field>,
}

impl<'a> FieldCollector<'a> {
    fn new(key: &'a str, fragments: &'a FragmentTable, variables: &'a VariableValues) -> Self {
        Self {
            key,
            fragments,
            variables,
            visited: HashSet::new(),
            found: Vec::new(),
        }
    }

    fn collect(&mut self, selections: &[Selection]) -> Result<()> {
        for selection in selections {
            if !should_include(selection.directives(), self.variables) {
                continue;
            }

            match selection {
                Selection::Field(field) => {
                    if field.response_key() == self.key {
                        self.found.push(field.clone());
                    }
                }
                Selection::InlineFragment(inline) => self.collect(inline.selections())?,
                Selection::FragmentSpread(spread) => {
                    if !self.visited.insert(Arc::clone(&spread.fragment_name)) {
                        continue;
                    }
                    let fragments: &'a FragmentTable = self.fragments;
                    let fragment = fragments.get(&*spread.fragment_name).ok_or_else(|| {
                        ApolloExtError::UnknownFragment(spread.fragment_name.to_string())
                    })?;
                    self.collect(fragment.selections())?;
                }
            }
        }
        Ok(())
    }
}
