use graphql_fields::{FieldsOptions, VariableValues};
use serde::Deserialize;

/// Contents of a `.graphql-fields.yml` (or `.json`) file.
///
/// ```yaml
/// excludedFields:
///   - __typename
/// variables:
///   withPets: true
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FieldsConfig {
    /// Field names excluded at every depth
    pub excluded_fields: Vec<String>,
    /// Variable values used when the caller supplies none for a name
    pub variables: VariableValues,
}

impl FieldsConfig {
    /// Options for a collection run, with `extra` exclusions appended.
    #[must_use]
    pub fn options<I, S>(&self, extra: I) -> FieldsOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut excluded_fields = self.excluded_fields.clone();
        for field in extra {
            let field = field.into();
            if !excluded_fields.contains(&field) {
                excluded_fields.push(field);
            }
        }
        FieldsOptions { excluded_fields }
    }

    /// Configured variables overridden key by key with `overrides`.
    #[must_use]
    pub fn variables_with(&self, overrides: VariableValues) -> VariableValues {
        let mut variables = self.variables.clone();
        variables.extend(overrides);
        variables
    }
}
