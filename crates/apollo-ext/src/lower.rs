//! Lowering from `apollo-parser` CST nodes to the `graphql-fields` model.
//!
//! Nodes the parser could only partially recover (a field without a name, a
//! spread without a fragment name) are dropped. Callers that care reject
//! trees with syntax errors before lowering.

use crate::{DocumentExt, NameExt};
use apollo_parser::cst;
use apollo_parser::SyntaxTree;
use graphql_fields::{
    Argument, Directive, Field, FragmentDefinition, FragmentSpread, FragmentTable, InlineFragment,
    Selection, Value,
};
use std::sync::Arc;

/// Collect every fragment definition of the document, keyed by name.
///
/// When a name is defined twice the last definition wins.
#[must_use]
pub fn fragment_table(tree: &SyntaxTree) -> FragmentTable {
    tree.fragments()
        .filter_map(|frag| lower_fragment_definition(&frag))
        .map(|frag| (Arc::clone(&frag.name), frag))
        .collect()
}

#[must_use]
pub fn lower_selection_set(set: &cst::SelectionSet) -> Vec<Selection> {
    set.selections().filter_map(|sel| lower_selection(&sel)).collect()
}

#[must_use]
pub fn lower_selection(selection: &cst::Selection) -> Option<Selection> {
    match selection {
        cst::Selection::Field(field) => lower_field(field).map(Selection::Field),
        cst::Selection::InlineFragment(inline) => {
            Some(Selection::InlineFragment(lower_inline_fragment(inline)))
        }
        cst::Selection::FragmentSpread(spread) => {
            lower_fragment_spread(spread).map(Selection::FragmentSpread)
        }
    }
}

#[must_use]
pub fn lower_field(field: &cst::Field) -> Option<Field> {
    let name = field.name_text()?;
    let alias = field
        .alias()
        .and_then(|alias| alias.name())
        .map(|n| Arc::from(n.text().to_string()));

    Some(Field {
        alias,
        name: Arc::from(name),
        arguments: lower_arguments(field.arguments()),
        directives: lower_directives(field.directives()),
        selection_set: field.selection_set().map(|set| lower_selection_set(&set)),
    })
}

fn lower_inline_fragment(inline: &cst::InlineFragment) -> InlineFragment {
    InlineFragment {
        type_condition: type_condition_name(inline.type_condition()),
        directives: lower_directives(inline.directives()),
        selection_set: inline.selection_set().map(|set| lower_selection_set(&set)),
    }
}

fn lower_fragment_spread(spread: &cst::FragmentSpread) -> Option<FragmentSpread> {
    Some(FragmentSpread {
        fragment_name: Arc::from(spread.name_text()?),
        directives: lower_directives(spread.directives()),
    })
}

#[must_use]
pub fn lower_fragment_definition(frag: &cst::FragmentDefinition) -> Option<FragmentDefinition> {
    Some(FragmentDefinition {
        name: Arc::from(frag.name_text()?),
        type_condition: type_condition_name(frag.type_condition())?,
        directives: lower_directives(frag.directives()),
        selection_set: frag.selection_set().map(|set| lower_selection_set(&set)),
    })
}

fn type_condition_name(condition: Option<cst::TypeCondition>) -> Option<Arc<str>> {
    condition
        .and_then(|tc| tc.named_type())
        .and_then(|nt| nt.name())
        .map(|name| Arc::from(name.text().to_string()))
}

#[must_use]
pub fn lower_directives(directives: Option<cst::Directives>) -> Vec<Directive> {
    let Some(directives) = directives else {
        return Vec::new();
    };

    directives
        .directives()
        .filter_map(|directive| {
            Some(Directive {
                name: Arc::from(directive.name_text()?),
                arguments: lower_arguments(directive.arguments()),
            })
        })
        .collect()
}

fn lower_arguments(arguments: Option<cst::Arguments>) -> Vec<Argument> {
    let Some(arguments) = arguments else {
        return Vec::new();
    };

    arguments
        .arguments()
        .filter_map(|arg| {
            Some(Argument {
                name: Arc::from(arg.name_text()?),
                value: lower_value(&arg.value()?)?,
            })
        })
        .collect()
}

#[must_use]
pub fn lower_value(value: &cst::Value) -> Option<Value> {
    let lowered = match value {
        cst::Value::Variable(var) => Value::Variable(Arc::from(var.name_text()?)),
        cst::Value::StringValue(string) => Value::String(Arc::from(String::from(string))),
        cst::Value::FloatValue(float) => {
            Value::Float(Arc::from(float.float_token()?.text().to_string()))
        }
        cst::Value::IntValue(int) => Value::Int(Arc::from(int.int_token()?.text().to_string())),
        cst::Value::BooleanValue(boolean) => Value::Boolean(boolean.true_token().is_some()),
        cst::Value::NullValue(_) => Value::Null,
        cst::Value::EnumValue(enum_value) => {
            Value::Enum(Arc::from(enum_value.name()?.text().to_string()))
        }
        cst::Value::ListValue(list) => {
            Value::List(list.values().filter_map(|item| lower_value(&item)).collect())
        }
        cst::Value::ObjectValue(object) => Value::Object(
            object
                .object_fields()
                .filter_map(|field| {
                    let name = field.name()?.text().to_string();
                    Some((Arc::from(name), lower_value(&field.value()?)?))
                })
                .collect(),
        ),
    };
    Some(lowered)
}

/// Convert a constant value (a variable default) to its runtime JSON form.
///
/// Variables cannot appear in constants and become `null`. Enum values are
/// represented by their name, as they are in a JSON variables payload.
#[must_use]
pub fn const_value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Variable(_) | Value::Null => serde_json::Value::Null,
        Value::Int(text) => text
            .parse::<i64>()
            .map(serde_json::Value::from)
            .unwrap_or_else(|_| float_to_json(text)),
        Value::Float(text) => float_to_json(text),
        Value::String(text) | Value::Enum(text) => serde_json::Value::String(text.to_string()),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::List(items) => items.iter().map(const_value_to_json).collect(),
        Value::Object(fields) => serde_json::Value::Object(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), const_value_to_json(value)))
                .collect(),
        ),
    }
}

fn float_to_json(text: &str) -> serde_json::Value {
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or(serde_json::Value::Null, serde_json::Value::Number)
}
