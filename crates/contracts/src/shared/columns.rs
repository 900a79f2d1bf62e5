//! Table column definitions and the per-user column preference record

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

/// Multi-sort priority; equals the field's index in `sortable_fields`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortPriority {
    pub multiple: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CellRender {
    /// Rendered from the cell value: booleans, numbers, dates, text
    #[default]
    Auto,
    Actions,
}

/// Renderable column derived from a model descriptor field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Flattened identity, e.g. `stockOwner_name`
    pub key: String,
    /// Accessor path into a result row, e.g. `["stockOwner", "name"]`
    pub data_index: Vec<String>,
    /// Projection text for the query layer, e.g. `stockOwner{name}`
    pub projection: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorter: Option<SortPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub render: CellRender,
}

impl ColumnSpec {
    pub const ACTIONS_KEY: &'static str = "actions";

    /// The trailing actions column. Not backed by a field and never sortable.
    pub fn actions(title: impl Into<String>) -> Self {
        Self {
            key: Self::ACTIONS_KEY.to_string(),
            data_index: Vec::new(),
            projection: String::new(),
            title: title.into(),
            sorter: None,
            fixed: Some(FixedSide::Right),
            hidden: false,
            render: CellRender::Actions,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }
}

/// Persisted table configuration
///
/// `table_columns` is the full ordered list with hidden/fixed flags;
/// `filtered_columns` is its visible subset in display order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPreference {
    pub visible_column_keys: Vec<String>,
    pub fixed_columns: Vec<String>,
    pub filtered_columns: Vec<ColumnSpec>,
    pub table_columns: Vec<ColumnSpec>,
}

impl ColumnPreference {
    /// Build a consistent preference from an ordered column list.
    pub fn from_columns(table_columns: Vec<ColumnSpec>) -> Self {
        let filtered_columns: Vec<ColumnSpec> =
            table_columns.iter().filter(|c| !c.hidden).cloned().collect();
        Self {
            visible_column_keys: filtered_columns.iter().map(|c| c.key.clone()).collect(),
            fixed_columns: table_columns
                .iter()
                .filter(|c| c.is_fixed())
                .map(|c| c.key.clone())
                .collect(),
            filtered_columns,
            table_columns,
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible_column_keys.iter().any(|k| k == key)
    }

    pub fn is_fixed(&self, key: &str) -> bool {
        self.fixed_columns.iter().any(|k| k == key)
    }

    /// Position of `key` in the stored order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.table_columns.iter().position(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(key: &str, hidden: bool, fixed: Option<FixedSide>) -> ColumnSpec {
        ColumnSpec {
            key: key.to_string(),
            data_index: vec![key.to_string()],
            projection: key.to_string(),
            title: key.to_string(),
            sorter: None,
            fixed,
            hidden,
            render: CellRender::Auto,
        }
    }

    #[test]
    fn test_from_columns_derives_keys() {
        let pref = ColumnPreference::from_columns(vec![
            column("name", false, Some(FixedSide::Left)),
            column("code", true, None),
            column("status", false, None),
        ]);
        assert_eq!(pref.visible_column_keys, vec!["name", "status"]);
        assert_eq!(pref.fixed_columns, vec!["name"]);
        assert_eq!(pref.filtered_columns.len(), 2);
        assert_eq!(pref.table_columns.len(), 3);
        assert!(pref.is_visible("status"));
        assert!(!pref.is_visible("code"));
        assert_eq!(pref.position("status"), Some(2));
    }

    #[test]
    fn test_stored_json_shape() {
        let pref = ColumnPreference::from_columns(vec![column("name", false, Some(FixedSide::Left))]);
        let value = serde_json::to_value(&pref).unwrap();
        assert_eq!(value["visibleColumnKeys"], json!(["name"]));
        assert_eq!(value["tableColumns"][0]["dataIndex"], json!(["name"]));
        assert_eq!(value["tableColumns"][0]["fixed"], json!("left"));

        let back: ColumnPreference = serde_json::from_value(value).unwrap();
        assert_eq!(back, pref);
    }
}
