//! Column materializer
//!
//! Turns a model descriptor, and optionally a stored preference, into the
//! ordered column list of a table. Pure: same inputs, same columns.

use contracts::shared::columns::{CellRender, ColumnPreference, ColumnSpec, FixedSide, SortPriority};
use contracts::shared::metadata::{DescriptorError, ModelDescriptor, Projection};
use std::collections::HashSet;

use crate::shared::labels::{humanize, LabelTable};

/// Columns of one table in display order, hidden ones included
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MaterializedColumns {
    pub columns: Vec<ColumnSpec>,
}

impl MaterializedColumns {
    pub fn visible(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| !c.hidden)
    }

    pub fn visible_keys(&self) -> Vec<String> {
        self.visible().map(|c| c.key.clone()).collect()
    }

    /// Projections to request from the list query, hidden columns included so
    /// toggling visibility does not need a refetch
    pub fn selection(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !c.projection.is_empty())
            .map(|c| c.projection.clone())
            .collect()
    }

    /// Visible columns as rendered: left-pinned first, right-pinned last,
    /// stored order kept within each group
    pub fn display_columns(&self) -> Vec<ColumnSpec> {
        let mut visible: Vec<ColumnSpec> = self.visible().cloned().collect();
        visible.sort_by_key(|c| match c.fixed {
            Some(FixedSide::Left) => 0,
            None => 1,
            Some(FixedSide::Right) => 2,
        });
        visible
    }

    pub fn to_preference(&self) -> ColumnPreference {
        ColumnPreference::from_columns(self.columns.clone())
    }
}

/// Debug builds surface configuration errors; release builds log and carry on.
fn configuration_error(error: DescriptorError) -> Result<(), DescriptorError> {
    if cfg!(debug_assertions) {
        Err(error)
    } else {
        log::error!("column configuration: {}", error);
        Ok(())
    }
}

/// Descriptor-derived columns: excluded fields dropped, hidden fields present
/// but invisible, relations flattened to their column key.
pub fn default_columns(
    descriptor: &ModelDescriptor,
    labels: &LabelTable,
) -> Result<Vec<ColumnSpec>, DescriptorError> {
    if let Err(error) = descriptor.validate() {
        configuration_error(error)?;
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(descriptor.list_fields.len());
    for &field in descriptor.list_fields {
        if descriptor.is_excluded_from_list(field) {
            continue;
        }

        let projection = match Projection::parse(field) {
            Ok(p) => p,
            Err(source) => {
                configuration_error(DescriptorError::InvalidProjection {
                    entity: descriptor.entity_name,
                    field,
                    source,
                })?;
                continue;
            }
        };
        let (Some(key), Some(path)) = (projection.column_key(), projection.path()) else {
            configuration_error(DescriptorError::BranchingProjection {
                entity: descriptor.entity_name,
                field,
            })?;
            continue;
        };
        if !seen.insert(key.clone()) {
            configuration_error(DescriptorError::DuplicateListField {
                entity: descriptor.entity_name,
                field,
            })?;
            continue;
        }

        let title = match descriptor.label_for(field) {
            Some(label_key) => labels.text(label_key),
            None => humanize(&key),
        };

        columns.push(ColumnSpec {
            data_index: path.iter().map(|s| s.to_string()).collect(),
            projection: projection.to_string(),
            title,
            sorter: descriptor
                .sort_priority(field)
                .map(|multiple| SortPriority { multiple }),
            fixed: None,
            hidden: descriptor.is_hidden_in_list(field),
            render: CellRender::Auto,
            key,
        });
    }
    Ok(columns)
}

/// Apply a stored preference to descriptor-derived columns.
///
/// Stored order, visibility and pinning win; stored keys the descriptor no
/// longer lists are dropped; descriptor columns missing from the preference
/// are appended with their default visibility.
///
/// A preference without `table_columns` only records the visible keys, so
/// every other column is appended hidden.
pub fn apply_preference(defaults: Vec<ColumnSpec>, preference: &ColumnPreference) -> Vec<ColumnSpec> {
    let visible_only = preference.table_columns.is_empty();
    let stored_order: Vec<&str> = if visible_only {
        preference.visible_column_keys.iter().map(String::as_str).collect()
    } else {
        preference.table_columns.iter().map(|c| c.key.as_str()).collect()
    };

    let mut remaining: Vec<Option<ColumnSpec>> = defaults.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for key in stored_order {
        let Some(slot) = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|c| c.key == key))
        else {
            continue;
        };
        if let Some(mut column) = slot.take() {
            column.hidden = !preference.is_visible(key);
            column.fixed = if preference.is_fixed(key) {
                let stored_side = preference
                    .table_columns
                    .iter()
                    .find(|c| c.key == key)
                    .and_then(|c| c.fixed);
                Some(stored_side.unwrap_or(FixedSide::Left))
            } else {
                None
            };
            ordered.push(column);
        }
    }

    ordered.extend(remaining.into_iter().flatten().map(|mut column| {
        if visible_only {
            column.hidden = true;
        }
        column
    }));
    ordered
}

/// Materialize the columns of `descriptor`, seeded by `preference` when one is stored.
pub fn materialize(
    descriptor: &ModelDescriptor,
    preference: Option<&ColumnPreference>,
) -> Result<MaterializedColumns, DescriptorError> {
    materialize_with_labels(descriptor, preference, &LabelTable::default())
}

pub fn materialize_with_labels(
    descriptor: &ModelDescriptor,
    preference: Option<&ColumnPreference>,
    labels: &LabelTable,
) -> Result<MaterializedColumns, DescriptorError> {
    let defaults = default_columns(descriptor, labels)?;
    let columns = match preference {
        Some(preference) => apply_preference(defaults, preference),
        None => defaults,
    };
    Ok(MaterializedColumns { columns })
}
