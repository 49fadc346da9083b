use crate::ast::ResolveInfo;
use crate::error::Result;
use crate::field_map::FieldMap;
use crate::flatten::Flattener;
use serde::{Deserialize, Serialize};

/// Options for [`collect_requested_fields`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldsOptions {
    /// Field names left out of the result at every depth
    pub excluded_fields: Vec<String>,
}

impl FieldsOptions {
    #[must_use]
    pub fn excluding<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collect the fields requested below the resolver's field nodes, folding
/// them into `initial`.
///
/// Passing a non-empty `initial` map composes results across several
/// resolver contexts.
#[tracing::instrument(
    skip_all,
    fields(field_nodes = info.field_nodes.len(), excluded = options.excluded_fields.len())
)]
pub fn collect_requested_fields(
    info: &ResolveInfo,
    initial: FieldMap,
    options: &FieldsOptions,
) -> Result<FieldMap> {
    let mut flattener = Flattener::new(&info.fragments, &info.variables, &options.excluded_fields);
    let mut fields = initial;
    for node in &info.field_nodes {
        flattener.flatten(node, &mut fields)?;
    }
    tracing::debug!(fields = fields.len(), "collected requested fields");
    Ok(fields)
}

/// [`collect_requested_fields`] with an empty accumulator and no exclusions.
pub fn requested_fields(info: &ResolveInfo) -> Result<FieldMap> {
    collect_requested_fields(info, FieldMap::new(), &FieldsOptions::default())
}
