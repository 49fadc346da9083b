//! `@skip` / `@include` evaluation.
//!
//! A selection is excluded when its `@skip` condition holds or its `@include`
//! condition does not (<https://spec.graphql.org/October2021/#sec--include>).
//! Any other directive is ignored.

use crate::ast::{Directive, Value, VariableValues};

pub const INCLUDE: &str = "include";
pub const SKIP: &str = "skip";

/// The folded outcome of a node's `@include` and `@skip` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveResults {
    pub should_include: bool,
    pub should_skip: bool,
}

impl Default for DirectiveResults {
    fn default() -> Self {
        Self {
            should_include: true,
            should_skip: false,
        }
    }
}

impl DirectiveResults {
    /// Whether the node must be left out of the output.
    #[must_use]
    pub const fn is_excluded(self) -> bool {
        self.should_skip || !self.should_include
    }
}

/// Fold the directives of a node left to right. When the same directive
/// appears more than once, the last one wins.
#[must_use]
pub fn directive_results(directives: &[Directive], variables: &VariableValues) -> DirectiveResults {
    directives
        .iter()
        .fold(DirectiveResults::default(), |results, directive| {
            match &*directive.name {
                INCLUDE => DirectiveResults {
                    should_include: directive_value(directive, variables),
                    ..results
                },
                SKIP => DirectiveResults {
                    should_skip: directive_value(directive, variables),
                    ..results
                },
                _ => results,
            }
        })
}

/// Evaluate the `if` argument of a directive.
///
/// A missing argument, an unbound variable, and `null`, list or object
/// literals all evaluate to `false`. Other literals are coerced by
/// truthiness: non-empty strings and enum values, and non-zero numbers, are
/// `true`.
#[must_use]
pub fn directive_value(directive: &Directive, variables: &VariableValues) -> bool {
    let Some(arg) = directive.argument("if") else {
        return false;
    };

    match &arg.value {
        Value::Variable(name) => variables.get(&**name).is_some_and(is_truthy),
        Value::Null | Value::List(_) | Value::Object(_) => false,
        Value::Boolean(value) => *value,
        Value::Int(text) | Value::Float(text) => text.parse::<f64>().is_ok_and(|n| n.abs() > 0.0),
        Value::String(text) | Value::Enum(text) => !text.is_empty(),
    }
}

/// Whether a node carrying `directives` takes part in the output.
#[must_use]
pub fn should_include(directives: &[Directive], variables: &VariableValues) -> bool {
    directives.is_empty() || !directive_results(directives, variables).is_excluded()
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
