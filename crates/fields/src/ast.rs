//! The selection tree a resolver sees at execution time.
//!
//! These types are produced by whatever sits upstream (a parser bridge, an
//! executor) and are consumed read-only by the flattening engine. Everything is
//! owned and serializable so a captured resolver context can be stored as JSON
//! and replayed later.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Fragment definitions of a document, keyed by fragment name.
pub type FragmentTable = HashMap<Arc<str>, FragmentDefinition>;

/// Runtime variable values, keyed by variable name (without the `$`).
pub type VariableValues = serde_json::Map<String, serde_json::Value>;

/// A single entry of a selection set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(Field),
    InlineFragment(InlineFragment),
    FragmentSpread(FragmentSpread),
}

/// A field selection such as `alias: name(arg: 1) @skip(if: $x) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Arc<str>>,
    pub name: Arc<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<Vec<Selection>>,
}

impl Field {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<Arc<str>>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    #[must_use]
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selection_set = Some(selections);
        self
    }

    /// The key this field occupies in a response: the alias if present, else the name.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// `... on Type @dir { ... }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<Vec<Selection>>,
}

/// `...FragmentName @dir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentSpread {
    pub fragment_name: Arc<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl FragmentSpread {
    pub fn new(fragment_name: impl Into<Arc<str>>) -> Self {
        Self {
            fragment_name: fragment_name.into(),
            directives: Vec::new(),
        }
    }
}

/// `fragment Name on Type @dir { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentDefinition {
    pub name: Arc<str>,
    pub type_condition: Arc<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<Vec<Selection>>,
}

/// A directive applied to a selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: Arc<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

impl Directive {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<Arc<str>>, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Find an argument by name
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| &*arg.name == name)
    }
}

/// An argument passed to a field or directive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: Arc<str>,
    pub value: Value,
}

/// An input value as written in the document.
///
/// Numbers keep their source text, so `Int("007")` round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Variable(Arc<str>),
    Int(Arc<str>),
    Float(Arc<str>),
    String(Arc<str>),
    Boolean(bool),
    Null,
    Enum(Arc<str>),
    List(Vec<Value>),
    Object(Vec<(Arc<str>, Value)>),
}

/// Everything a resolver knows about the part of the query it is resolving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolveInfo {
    /// The field nodes that resolve to the current field. Usually one, more
    /// when the same response key is selected in several places.
    pub field_nodes: Vec<Field>,
    #[serde(default)]
    pub fragments: FragmentTable,
    #[serde(default)]
    pub variables: VariableValues,
}

impl ResolveInfo {
    #[must_use]
    pub fn new(field_nodes: Vec<Field>, fragments: FragmentTable, variables: VariableValues) -> Self {
        Self {
            field_nodes,
            fragments,
            variables,
        }
    }

    /// Look up a fragment definition by name
    #[must_use]
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(name)
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Self {
        Self::InlineFragment(fragment)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Self::FragmentSpread(spread)
    }
}
