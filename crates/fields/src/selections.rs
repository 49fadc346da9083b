//! Uniform access to the children and directives of selection tree nodes.

use crate::ast::{Directive, Field, FragmentDefinition, FragmentSpread, InlineFragment, Selection};

/// A node that may own a selection set.
pub trait Selections {
    /// The node's child selections. Empty when the node has no selection set,
    /// or an empty one.
    fn selections(&self) -> &[Selection];
}

/// A node that may carry directives.
pub trait Directives {
    fn directives(&self) -> &[Directive];
}

impl Selections for Field {
    fn selections(&self) -> &[Selection] {
        self.selection_set.as_deref().unwrap_or_default()
    }
}

impl Selections for InlineFragment {
    fn selections(&self) -> &[Selection] {
        self.selection_set.as_deref().unwrap_or_default()
    }
}

impl Selections for FragmentDefinition {
    fn selections(&self) -> &[Selection] {
        self.selection_set.as_deref().unwrap_or_default()
    }
}

impl Selections for FragmentSpread {
    // A spread only names its fragment; its children live in the fragment table.
    fn selections(&self) -> &[Selection] {
        &[]
    }
}

impl Selections for Selection {
    fn selections(&self) -> &[Selection] {
        match self {
            Self::Field(field) => field.selections(),
            Self::InlineFragment(inline) => inline.selections(),
            Self::FragmentSpread(spread) => spread.selections(),
        }
    }
}

impl Directives for Field {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl Directives for InlineFragment {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl Directives for FragmentSpread {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl Directives for FragmentDefinition {
    fn directives(&self) -> &[Directive] {
        &self.directives
    }
}

impl Directives for Selection {
    fn directives(&self) -> &[Directive] {
        match self {
            Self::Field(field) => field.directives(),
            Self::InlineFragment(inline) => inline.directives(),
            Self::FragmentSpread(spread) => spread.directives(),
        }
    }
}
