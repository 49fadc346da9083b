//! `apollo-parser` bridge for `graphql-fields`.
//!
//! **Note**: This crate is specifically tied to `apollo-parser`'s CST types. The
//! core flattening logic lives in `graphql-fields` and knows nothing about any
//! parser.
//!
//! This crate provides:
//! - **Lowering** of operations, fragments, directives and values into the
//!   `graphql-fields` selection model
//! - **[`ResolveInfoBuilder`]**, which reproduces the context a resolver sees
//!   for a response path
//! - **Name and definition helpers** for CST nodes
//!
//! # Example
//!
//! ```
//! use graphql_fields::requested_fields;
//! use graphql_fields_apollo_ext::ResolveInfoBuilder;
//!
//! let source = r"
//!     query { person { ...PersonFields pets { name } } }
//!     fragment PersonFields on Person { name age }
//! ";
//! let tree = apollo_parser::Parser::new(source).parse();
//! let info = ResolveInfoBuilder::new(&tree).build(&["person"]).unwrap();
//!
//! let fields = requested_fields(&info).unwrap();
//! assert_eq!(fields.paths(), vec!["age", "name", "pets.name"]);
//! ```

mod definitions;
mod error;
mod lower;
mod names;
mod resolve;

pub use definitions::*;
pub use error::{ApolloExtError, Result};
pub use lower::{
    const_value_to_json, fragment_table, lower_directives, lower_field, lower_fragment_definition,
    lower_selection, lower_selection_set, lower_value,
};
pub use names::*;
pub use resolve::{split_path, ResolveInfoBuilder};
