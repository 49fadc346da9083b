//! Name extraction for the CST nodes the lowering pass reads.
//!
//! # Example
//!
//! ```
//! use graphql_fields_apollo_ext::NameExt;
//! use apollo_parser::Parser;
//!
//! let source = "fragment UserFields on User { name }";
//! let tree = Parser::new(source).parse();
//!
//! for def in tree.document().definitions() {
//!     if let apollo_parser::cst::Definition::FragmentDefinition(frag) = def {
//!         assert_eq!(frag.name_text(), Some("UserFields".to_string()));
//!     }
//! }
//! ```

use apollo_parser::cst;

/// Extension trait for extracting names from CST nodes.
pub trait NameExt {
    /// Get the name text as a String, if available.
    fn name_text(&self) -> Option<String>;
}

impl NameExt for cst::OperationDefinition {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::FragmentDefinition {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}

impl NameExt for cst::FragmentSpread {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}

impl NameExt for cst::Field {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::Directive {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::Argument {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::Variable {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::VariableDefinition {
    fn name_text(&self) -> Option<String> {
        self.variable().and_then(|v| v.name_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    #[test]
    fn test_operation_and_variable_names() {
        let tree = Parser::new("query GetUser($id: ID!) { user(id: $id) { id } }").parse();
        let Some(cst::Definition::OperationDefinition(op)) = tree.document().definitions().next() else {
            panic!("expected an operation");
        };

        assert_eq!(op.name_text(), Some("GetUser".to_string()));

        let var_def = op
            .variable_definitions()
            .and_then(|defs| defs.variable_definitions().next())
            .unwrap();
        assert_eq!(var_def.name_text(), Some("id".to_string()));
    }

    #[test]
    fn test_anonymous_operation_has_no_name() {
        let tree = Parser::new("{ user { id } }").parse();
        let Some(cst::Definition::OperationDefinition(op)) = tree.document().definitions().next() else {
            panic!("expected an operation");
        };

        assert_eq!(op.name_text(), None);
    }
}
