//! Snapshot testing helpers for field maps
//!
//! Field maps are rendered as GraphQL selection set bodies so snapshots read
//! like the query that produced them.

use graphql_fields::{FieldMap, FieldsError};

/// Format a field map for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use graphql_fields_test_utils::assertions::format_field_map;
///
/// let fields = requested_fields(&info).unwrap();
/// insta::assert_snapshot!(format_field_map(&fields));
/// ```
#[must_use]
pub fn format_field_map(fields: &FieldMap) -> String {
    if fields.is_empty() {
        return String::from("(no fields)");
    }
    fields.to_string()
}

/// Format the outcome of a collection, successful or not.
#[must_use]
pub fn format_result(result: &Result<FieldMap, FieldsError>) -> String {
    match result {
        Ok(fields) => format_field_map(fields),
        Err(err) => format!("error: {err}"),
    }
}
