//! The recursive core: folds a selection tree into a [`FieldMap`].
//!
//! Inline fragments and fragment spreads are transparent, their selections
//! land at the level they are spread into. When the same field is reached
//! through several paths the nested selections are unioned, except that a
//! field seen as a leaf stays a leaf.

use crate::ast::{Field, FragmentSpread, FragmentTable, Selection, VariableValues};
use crate::directives::directive_results;
use crate::error::{FieldsError, Result};
use crate::field_map::{FieldMap, FieldValue};
use crate::selections::{Directives, Selections};
use std::collections::HashSet;
use std::sync::Arc;

/// Per-call traversal state.
///
/// Assumes the fragment table has been validated upstream, but still refuses
/// to recurse into a fragment that is already being expanded on the current
/// path.
pub struct Flattener<'a> {
    fragments: &'a FragmentTable,
    variables: &'a VariableValues,
    excluded: HashSet<&'a str>,
    /// Fragments being expanded on the current path, outermost first
    expanding: Vec<Arc<str>>,
}

impl<'a> Flattener<'a> {
    #[must_use]
    pub fn new(
        fragments: &'a FragmentTable,
        variables: &'a VariableValues,
        excluded_fields: &'a [String],
    ) -> Self {
        Self {
            fragments,
            variables,
            excluded: excluded_fields.iter().map(String::as_str).collect(),
            expanding: Vec::new(),
        }
    }

    /// Fold the child selections of `node` into `acc`.
    pub fn flatten<N>(&mut self, node: &N, acc: &mut FieldMap) -> Result<()>
    where
        N: Selections + ?Sized,
    {
        for selection in node.selections() {
            self.flatten_selection(selection, acc)?;
        }
        Ok(())
    }

    fn flatten_selection(&mut self, selection: &Selection, acc: &mut FieldMap) -> Result<()> {
        let directives = selection.directives();
        if !directives.is_empty() && directive_results(directives, self.variables).is_excluded() {
            tracing::trace!(?selection, "selection pruned by directives");
            return Ok(());
        }

        match selection {
            Selection::Field(field) => self.flatten_field(field, acc),
            Selection::InlineFragment(inline) => self.flatten(inline, acc),
            Selection::FragmentSpread(spread) => self.flatten_spread(spread, acc),
        }
    }

    fn flatten_field(&mut self, field: &Field, acc: &mut FieldMap) -> Result<()> {
        let name = &*field.name;
        if self.excluded.contains(name) {
            tracing::trace!(field = name, "field excluded");
            return Ok(());
        }

        if field.selections().is_empty() {
            acc.insert(name, FieldValue::Leaf);
            return Ok(());
        }

        // A field already known to be a plain selection cannot gain sub-fields.
        if acc.is_leaf(name) {
            return Ok(());
        }

        let seed = acc.remove(name);
        let existed = seed.is_some();
        let mut nested = match seed {
            Some(FieldValue::Nested(map)) => map,
            _ => FieldMap::new(),
        };
        self.flatten(field, &mut nested)?;

        if nested.is_empty() && !existed {
            tracing::trace!(field = name, "every sub-selection pruned, dropping field");
            return Ok(());
        }

        acc.insert(name, FieldValue::Nested(nested));
        Ok(())
    }

    fn flatten_spread(&mut self, spread: &FragmentSpread, acc: &mut FieldMap) -> Result<()> {
        let name = &spread.fragment_name;

        if self.expanding.contains(name) {
            let mut path = self.expanding.clone();
            path.push(Arc::clone(name));
            return Err(FieldsError::CyclicFragment {
                name: Arc::clone(name),
                path,
            });
        }

        let fragments: &'a FragmentTable = self.fragments;
        let fragment = fragments
            .get(&**name)
            .ok_or_else(|| FieldsError::UnknownFragment {
                name: Arc::clone(name),
            })?;

        self.expanding.push(Arc::clone(name));
        let result = self.flatten(fragment, acc);
        self.expanding.pop();
        result
    }
}
