//! Operation and fragment lookup on parsed documents.
//!
//! # Example
//!
//! ```
//! use graphql_fields_apollo_ext::DocumentExt;
//! use apollo_parser::Parser;
//!
//! let source = r"
//!     query GetUser { user { ...UserFields } }
//!     fragment UserFields on User { name }
//! ";
//! let tree = Parser::new(source).parse();
//!
//! assert_eq!(tree.operations().count(), 1);
//! assert!(tree.find_fragment("UserFields").is_some());
//! ```

use crate::NameExt;
use apollo_parser::cst;
use apollo_parser::SyntaxTree;

/// Extension trait for convenient access to executable definitions.
pub trait DocumentExt {
    /// Iterate over all operation definitions in the document.
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition>;

    /// Iterate over all fragment definitions in the document.
    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition>;

    /// Find an operation by name.
    fn find_operation(&self, name: &str) -> Option<cst::OperationDefinition>;

    /// Find a fragment by name.
    fn find_fragment(&self, name: &str) -> Option<cst::FragmentDefinition>;
}

impl DocumentExt for SyntaxTree {
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::OperationDefinition(op) = def {
                Some(op)
            } else {
                None
            }
        })
    }

    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::FragmentDefinition(frag) = def {
                Some(frag)
            } else {
                None
            }
        })
    }

    fn find_operation(&self, name: &str) -> Option<cst::OperationDefinition> {
        self.operations()
            .find(|op| op.name_text().as_deref() == Some(name))
    }

    fn find_fragment(&self, name: &str) -> Option<cst::FragmentDefinition> {
        self.fragments()
            .find(|frag| frag.name_text().as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    #[test]
    fn test_operations_skip_type_definitions() {
        let source = r"
            type User { id: ID! }
            query GetUser { user { id } }
            mutation UpdateUser { updateUser { id } }
            fragment UserFields on User { name }
        ";
        let tree = Parser::new(source).parse();

        assert_eq!(tree.operations().count(), 2);
        assert_eq!(tree.fragments().count(), 1);
    }

    #[test]
    fn test_find_operation() {
        let source = r"
            query GetUser { user { id } }
            query GetPost { post { id } }
        ";
        let tree = Parser::new(source).parse();

        assert!(tree.find_operation("GetPost").is_some());
        assert!(tree.find_operation("NonExistent").is_none());
    }

    #[test]
    fn test_find_fragment() {
        let source = "fragment UserFields on User { name }";
        let tree = Parser::new(source).parse();

        assert!(tree.find_fragment("UserFields").is_some());
        assert!(tree.find_fragment("NonExistent").is_none());
    }
}
