//! Work out which fields a GraphQL resolver was asked for.
//!
//! Given the selection tree a resolver sees at execution time, this crate
//! produces a [`FieldMap`] naming every requested field and sub-field, with
//! fragment spreads and inline fragments flattened into place and
//! `@skip`/`@include` applied. Resolvers use it to avoid fetching columns or
//! calling services for data nobody asked for.
//!
//! # Example
//!
//! ```
//! use graphql_fields::{requested_fields, Field, FragmentTable, ResolveInfo, VariableValues};
//!
//! let user = Field::new("user").with_selections(vec![
//!     Field::new("id").into(),
//!     Field::new("friends").with_selections(vec![Field::new("name").into()]).into(),
//! ]);
//! let info = ResolveInfo::new(vec![user], FragmentTable::new(), VariableValues::new());
//!
//! let fields = requested_fields(&info).unwrap();
//! assert!(fields.is_leaf("id"));
//! assert!(fields.nested("friends").unwrap().is_leaf("name"));
//! assert_eq!(fields.paths(), vec!["friends.name", "id"]);
//! ```
//!
//! The input is assumed to come from a validated document. Spreads of unknown
//! or cyclic fragments are reported as [`FieldsError`]s rather than followed.

mod ast;
mod collect;
mod directives;
mod error;
mod field_map;
mod flatten;
mod selections;

pub use ast::*;
pub use collect::{collect_requested_fields, requested_fields, FieldsOptions};
pub use directives::{directive_results, directive_value, should_include, DirectiveResults, INCLUDE, SKIP};
pub use error::{FieldsError, Result};
pub use field_map::{FieldMap, FieldValue};
pub use flatten::Flattener;
pub use selections::{Directives, Selections};
