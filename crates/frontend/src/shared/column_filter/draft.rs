use contracts::shared::columns::{ColumnPreference, ColumnSpec, FixedSide};
use std::collections::HashSet;

use crate::shared::column_prefs::ColumnPreferenceStore;
use crate::shared::graphql::ApiError;

/// Working copy edited by the drawer. Nothing is persisted until `confirm`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnFilterDraft {
    defaults: Vec<ColumnSpec>,
    columns: Vec<ColumnSpec>,
}

impl ColumnFilterDraft {
    /// `current` is what the table shows now, `defaults` what the descriptor derives.
    pub fn new(current: Vec<ColumnSpec>, defaults: Vec<ColumnSpec>) -> Self {
        let mut draft = Self {
            defaults,
            columns: current,
        };
        draft.dedup();
        draft
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn toggle_visibility(&mut self, key: &str) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.hidden = !column.hidden;
        }
    }

    /// Pin or unpin one column. Several columns may be pinned at once.
    pub fn toggle_fixed(&mut self, key: &str) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.fixed = match column.fixed {
                Some(_) => None,
                None => Some(FixedSide::Left),
            };
        }
    }

    /// Drag the column at `from` to position `to`. Out-of-range `from` is
    /// ignored, `to` is clamped. Keys stay unique.
    pub fn move_column(&mut self, from: usize, to: usize) {
        if from >= self.columns.len() {
            return;
        }
        let column = self.columns.remove(from);
        let to = to.min(self.columns.len());
        self.columns.insert(to, column);
        self.dedup();
    }

    /// Drag by key, as emitted by the drop target
    pub fn move_key(&mut self, key: &str, to: usize) {
        if let Some(from) = self.columns.iter().position(|c| c.key == key) {
            self.move_column(from, to);
        }
    }

    /// Hard reset to the descriptor-derived defaults
    pub fn cancel(&mut self) {
        self.columns = self.defaults.clone();
    }

    pub fn confirm(&self) -> ColumnPreference {
        ColumnPreference::from_columns(self.columns.clone())
    }

    fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.columns.retain(|c| seen.insert(c.key.clone()));
    }
}

/// Persist the confirmed draft through `store`.
pub async fn save_preference(
    store: &dyn ColumnPreferenceStore,
    key: &str,
    draft: &ColumnFilterDraft,
) -> Result<ColumnPreference, ApiError> {
    let preference = draft.confirm();
    store.save(key, &preference).await?;
    Ok(preference)
}
