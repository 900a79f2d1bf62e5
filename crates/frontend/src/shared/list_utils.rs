//! Sort and filter helpers for list screens

use std::collections::HashMap;

use contracts::shared::graphql::OrderByItem;
use contracts::shared::metadata::{FieldInputError, FilterField};
use serde_json::{Map, Value};

/// Next sort after a click on the header of `field`.
///
/// A click cycles the field through ascending, descending and unsorted.
/// Without `multi` the clicked field replaces every other sort key; with it
/// the field is added to the current keys, ordered by `priority`.
/// `None` means "use the descriptor's default sort".
pub fn toggle_sort(
    current: Option<&[OrderByItem]>,
    field: &str,
    multi: bool,
    priority: impl Fn(&str) -> Option<u32>,
) -> Option<Vec<OrderByItem>> {
    let current = current.unwrap_or(&[]);
    let next_direction = match current.iter().find(|o| o.field == field) {
        None => Some(true),
        Some(o) if o.ascending => Some(false),
        Some(_) => None,
    };

    let mut sort: Vec<OrderByItem> = if multi {
        current.iter().filter(|o| o.field != field).cloned().collect()
    } else {
        Vec::new()
    };
    if let Some(ascending) = next_direction {
        sort.push(OrderByItem {
            field: field.to_string(),
            ascending,
        });
    }
    sort.sort_by_key(|o| priority(&o.field).unwrap_or(u32::MAX));

    if sort.is_empty() {
        None
    } else {
        Some(sort)
    }
}

pub fn get_sort_indicator(sort: &[OrderByItem], field: &str) -> &'static str {
    match sort.iter().find(|o| o.field == field) {
        Some(o) if o.ascending => " ▲",
        Some(_) => " ▼",
        None => " ⇅",
    }
}

pub fn get_sort_class(sort: &[OrderByItem], field: &str) -> &'static str {
    if sort.iter().any(|o| o.field == field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Parse raw filter inputs into GraphQL `filters`.
///
/// Blank optional inputs are left out. Every rejected input is reported,
/// keyed by field name.
pub fn build_filters(
    fields: &[FilterField],
    raw: &HashMap<String, String>,
) -> Result<Map<String, Value>, Vec<(String, FieldInputError)>> {
    let mut filters = Map::new();
    let mut errors = Vec::new();
    for field in fields {
        let input = raw.get(field.name).map(String::as_str).unwrap_or("");
        match field.parse_input(input) {
            Ok(Some(value)) => {
                filters.insert(field.name.to_string(), value.to_json());
            }
            Ok(None) => {}
            Err(e) => errors.push((field.name.to_string(), e)),
        }
    }
    if errors.is_empty() {
        Ok(filters)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::FieldKind;
    use serde_json::json;

    fn order(field: &str, ascending: bool) -> OrderByItem {
        OrderByItem {
            field: field.to_string(),
            ascending,
        }
    }

    fn priority(field: &str) -> Option<u32> {
        ["name", "status", "created"]
            .iter()
            .position(|f| *f == field)
            .map(|p| p as u32)
    }

    #[test]
    fn test_click_cycles_direction() {
        let first = toggle_sort(None, "name", false, priority);
        assert_eq!(first, Some(vec![order("name", true)]));

        let second = toggle_sort(first.as_deref(), "name", false, priority);
        assert_eq!(second, Some(vec![order("name", false)]));

        let third = toggle_sort(second.as_deref(), "name", false, priority);
        assert_eq!(third, None);
    }

    #[test]
    fn test_single_sort_replaces_other_keys() {
        let current = vec![order("name", true), order("status", false)];
        assert_eq!(
            toggle_sort(Some(&current), "created", false, priority),
            Some(vec![order("created", true)])
        );
    }

    #[test]
    fn test_multi_sort_orders_by_priority() {
        let current = vec![order("created", false)];
        let next = toggle_sort(Some(&current), "name", true, priority).unwrap();
        assert_eq!(next, vec![order("name", true), order("created", false)]);

        let removed = toggle_sort(Some(&[order("name", false), order("created", false)]), "name", true, priority);
        assert_eq!(removed, Some(vec![order("created", false)]));
    }

    #[test]
    fn test_sort_indicator() {
        let sort = vec![order("name", false)];
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "code"), " ⇅");
        assert_eq!(get_sort_class(&sort, "name"), "sort-icon active");
    }

    #[test]
    fn test_build_filters_collects_errors() {
        let fields = [
            FilterField::new("name", "common:name", FieldKind::TEXT),
            FilterField::new("quantity", "common:quantity", FieldKind::INTEGER),
            FilterField::new("created", "common:created", FieldKind::DATE),
        ];

        let mut raw = HashMap::new();
        raw.insert("name".to_string(), " pallet ".to_string());
        raw.insert("quantity".to_string(), "12".to_string());
        let filters = build_filters(&fields, &raw).unwrap();
        assert_eq!(Value::Object(filters), json!({ "name": "pallet", "quantity": 12 }));

        raw.insert("quantity".to_string(), "1.5".to_string());
        raw.insert("created".to_string(), "31/12/2024".to_string());
        let errors = build_filters(&fields, &raw).unwrap_err();
        let names: Vec<&str> = errors.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["quantity", "created"]);
        assert_eq!(
            errors[0].1,
            FieldInputError::NotAnInteger { field: "quantity" }
        );
    }
}
