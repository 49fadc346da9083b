//! The flattened output: field name to either a leaf marker or a nested map.
//!
//! At the serialization boundary a leaf is written as `1` and a nested map as
//! an object, so `{ user { id } }` becomes `{"user":{"id":1}}`.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// The value stored for one field name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawFieldValue")]
pub enum FieldValue {
    /// Selected without a sub-selection
    Leaf,
    /// Selected with sub-selections
    Nested(FieldMap),
}

impl FieldValue {
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    #[must_use]
    pub const fn as_nested(&self) -> Option<&FieldMap> {
        match self {
            Self::Leaf => None,
            Self::Nested(map) => Some(map),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf => serializer.serialize_u8(1),
            Self::Nested(map) => map.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldValue {
    Leaf(f64),
    Nested(FieldMap),
}

impl From<RawFieldValue> for FieldValue {
    fn from(raw: RawFieldValue) -> Self {
        match raw {
            RawFieldValue::Leaf(_) => Self::Leaf,
            RawFieldValue::Nested(map) => Self::Nested(map),
        }
    }
}

/// Requested fields keyed by field name, ordered by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether `name` was selected as a plain field.
    #[must_use]
    pub fn is_leaf(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_leaf)
    }

    /// The sub-selections of `name`, if it was selected with any.
    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&FieldMap> {
        self.get(name).and_then(FieldValue::as_nested)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Dotted paths of every leaf, depth first: `{ user { id } }` gives `user.id`.
    ///
    /// A nested map with no entries contributes its own path.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for (name, value) in &self.0 {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match value {
                FieldValue::Nested(map) if !map.is_empty() => map.collect_paths(&path, paths),
                _ => paths.push(path),
            }
        }
    }

    /// Fold `other` into this map.
    ///
    /// A leaf on either side wins over a nested map for the same name; two
    /// nested maps are merged recursively.
    pub fn merge(&mut self, other: FieldMap) {
        for (name, value) in other.0 {
            match value {
                FieldValue::Leaf => {
                    self.0.insert(name, FieldValue::Leaf);
                }
                FieldValue::Nested(theirs) => match self.0.entry(name) {
                    btree_map::Entry::Vacant(entry) => {
                        entry.insert(FieldValue::Nested(theirs));
                    }
                    btree_map::Entry::Occupied(mut entry) => {
                        if let FieldValue::Nested(ours) = entry.get_mut() {
                            ours.merge(theirs);
                        }
                    }
                },
            }
        }
    }
}

/// Renders the map as a GraphQL selection set body, two spaces per level:
///
/// ```text
/// name
/// pets {
///   name
/// }
/// ```
impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_level(f, 0, &mut true)
    }
}

impl FieldMap {
    fn write_level(&self, f: &mut fmt::Formatter<'_>, depth: usize, first: &mut bool) -> fmt::Result {
        for (name, value) in &self.0 {
            if !std::mem::take(first) {
                writeln!(f)?;
            }
            let indent = "  ".repeat(depth);
            match value {
                FieldValue::Leaf => write!(f, "{indent}{name}")?,
                FieldValue::Nested(map) if map.is_empty() => write!(f, "{indent}{name} {{}}")?,
                FieldValue::Nested(map) => {
                    write!(f, "{indent}{name} {{")?;
                    map.write_level(f, depth + 1, first)?;
                    write!(f, "\n{indent}}}")?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> FieldMap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_leaf_serializes_as_one() {
        let fields: FieldMap = [
            ("name", FieldValue::Leaf),
            ("pets", FieldValue::Nested([("age", FieldValue::Leaf)].into_iter().collect())),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "name": 1, "pets": { "age": 1 } })
        );
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_objects() {
        let fields = map(json!({ "id": 1, "user": { "name": 1.0 }, "empty": {} }));

        assert!(fields.is_leaf("id"));
        assert!(fields.nested("user").unwrap().is_leaf("name"));
        assert!(fields.nested("empty").unwrap().is_empty());
    }

    #[test]
    fn test_accessors() {
        let fields = map(json!({ "id": 1, "user": { "name": 1 } }));

        assert_eq!(fields.len(), 2);
        assert!(fields.contains("user"));
        assert!(!fields.is_leaf("user"));
        assert!(fields.nested("id").is_none());
        assert!(fields.get("missing").is_none());
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["id", "user"]);
    }

    #[test]
    fn test_paths() {
        let fields = map(json!({
            "users": {
                "edges": { "cursor": 1, "node": { "id": 1 } },
                "pageInfo": {}
            },
            "total": 1
        }));

        assert_eq!(
            fields.paths(),
            vec![
                "total",
                "users.edges.cursor",
                "users.edges.node.id",
                "users.pageInfo"
            ]
        );
    }

    #[test]
    fn test_merge_unions_nested_maps() {
        let mut ours = map(json!({ "node": { "addressBook": { "apiType": 1 } } }));
        ours.merge(map(json!({ "node": { "proProfile": { "apiType": 1 } }, "cursor": 1 })));

        assert_eq!(
            serde_json::to_value(&ours).unwrap(),
            json!({
                "cursor": 1,
                "node": {
                    "addressBook": { "apiType": 1 },
                    "proProfile": { "apiType": 1 }
                }
            })
        );
    }

    #[test]
    fn test_display_as_selection_set() {
        let fields = map(json!({ "name": 1, "pets": { "name": 1, "owner": { "id": 1 } }, "tags": {} }));

        assert_eq!(
            fields.to_string(),
            "name\npets {\n  name\n  owner {\n    id\n  }\n}\ntags {}"
        );
        assert_eq!(FieldMap::new().to_string(), "");
    }

    #[test]
    fn test_merge_leaf_wins() {
        let mut ours = map(json!({ "a": 1, "b": { "x": 1 } }));
        ours.merge(map(json!({ "a": { "y": 1 }, "b": 1 })));

        assert!(ours.is_leaf("a"));
        assert!(ours.is_leaf("b"));
    }
}
