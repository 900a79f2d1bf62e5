//! Per-entity model descriptor
//!
//! All string fields are 'static: descriptors are compile-time constants.

use super::projection::Projection;
use super::validation::{DescriptorError, FilterField};
use crate::shared::graphql::OrderByItem;
use serde_json::Value;

/// GraphQL operation names for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub detail: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub export: Option<&'static str>,
}

/// Ordering applied by list queries when the caller gives none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSort {
    pub field: &'static str,
    pub ascending: bool,
}

impl DefaultSort {
    pub const CREATED_DESC: DefaultSort = DefaultSort {
        field: "created",
        ascending: false,
    };

    pub fn to_order_by(&self) -> OrderByItem {
        OrderByItem {
            field: self.field.to_string(),
            ascending: self.ascending,
        }
    }
}

/// Constant filter value baked into a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl StaticValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String((*s).to_string()),
            Self::Int(i) => Value::from(*i),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

/// Titled group of fields on a detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailGroup {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDescriptor {
    /// Entity type name, also the prefix of device-local table keys
    pub entity_name: &'static str,
    pub table_name: &'static str,
    /// GraphQL resolver root, also the prefix of per-user table settings codes
    pub resolver_name: &'static str,
    /// Console page listing the entity, e.g. `/carriers`
    pub page_path: &'static str,
    pub endpoints: Endpoints,
    pub list_fields: &'static [&'static str],
    pub detail_fields: &'static [&'static str],
    pub sortable_fields: &'static [&'static str],
    pub excluded_list_fields: &'static [&'static str],
    pub excluded_detail_fields: &'static [&'static str],
    pub hidden_list_fields: &'static [&'static str],
    /// field -> label key
    pub displayed_labels: &'static [(&'static str, &'static str)],
    pub detail_groups: &'static [DetailGroup],
    pub default_sort: DefaultSort,
    /// Filters merged into every list query; callers cannot override them
    pub structural_filters: &'static [(&'static str, StaticValue)],
    pub filter_fields: &'static [FilterField],
}

impl ModelDescriptor {
    pub fn label_for(&self, field: &str) -> Option<&'static str> {
        self.displayed_labels
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, label)| *label)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable_fields.iter().any(|f| matches_field(f, field))
    }

    /// Position of `field` in `sortable_fields`, used as multi-sort priority
    pub fn sort_priority(&self, field: &str) -> Option<u32> {
        self.sortable_fields
            .iter()
            .position(|f| matches_field(f, field))
            .map(|i| i as u32)
    }

    pub fn is_excluded_from_list(&self, field: &str) -> bool {
        self.excluded_list_fields
            .iter()
            .any(|f| matches_field(f, field))
    }

    pub fn is_hidden_in_list(&self, field: &str) -> bool {
        self.hidden_list_fields.iter().any(|f| matches_field(f, field))
    }

    /// Detail fields minus `excluded_detail_fields`
    pub fn visible_detail_fields(&self) -> Vec<&'static str> {
        self.detail_fields
            .iter()
            .copied()
            .filter(|f| !self.excluded_detail_fields.iter().any(|e| matches_field(e, f)))
            .collect()
    }

    /// Device-local storage key for this entity's column preferences
    pub fn local_table_key(&self) -> String {
        format!("{}-filter-table", self.entity_name)
    }

    /// Per-user settings code for this entity's table on `page_path`
    pub fn settings_code(&self, page_path: &str) -> String {
        format!("{}{}", self.resolver_name, page_path)
    }

    /// Parsed list projections in declaration order
    pub fn list_projections(&self) -> Result<Vec<Projection>, DescriptorError> {
        self.list_fields
            .iter()
            .map(|&field| {
                Projection::parse(field).map_err(|source| DescriptorError::InvalidProjection {
                    entity: self.entity_name,
                    field,
                    source,
                })
            })
            .collect()
    }
}

/// `a` and `b` name the same list field, directly or through a relation-qualified
/// form: `stockOwner{name}` is matched by itself, by `stockOwner_name` and by `stockOwner`.
pub(crate) fn matches_field(a: &str, b: &str) -> bool {
    a == b || is_relation_form(a, b) || is_relation_form(b, a)
}

fn is_relation_form(declared: &str, candidate: &str) -> bool {
    match Projection::parse(declared) {
        Ok(p) if !p.is_leaf() => {
            p.root() == candidate || p.column_key().as_deref() == Some(candidate)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_field_relation_forms() {
        assert!(matches_field("name", "name"));
        assert!(!matches_field("name", "code"));
        assert!(matches_field("stockOwner{name}", "stockOwner{name}"));
        assert!(matches_field("stockOwner{name}", "stockOwner_name"));
        assert!(matches_field("stockOwner{name}", "stockOwner"));
        assert!(matches_field("stockOwner", "stockOwner{name}"));
        assert!(!matches_field("stockOwner{name}", "name"));
    }
}
