//! Every model descriptor known to the console

use super::*;
use crate::shared::metadata::ModelDescriptor;

pub const ALL: &[&ModelDescriptor] = &[
    &a001_article::DESCRIPTOR,
    &a002_block::DESCRIPTOR,
    &a003_carrier::DESCRIPTOR,
    &a004_location::DESCRIPTOR,
    &a005_stock_owner::DESCRIPTOR,
    &a006_purchase_order::DESCRIPTOR,
    &a007_cycle_count::DESCRIPTOR,
    &a008_movement::DESCRIPTOR,
    &a009_stock_status::DESCRIPTOR,
    &a010_delivery::DESCRIPTOR,
    &a011_handling_unit::DESCRIPTOR,
    &a012_barcode::DESCRIPTOR,
    &a013_handling_unit_type::DESCRIPTOR,
];

pub fn find(entity_name: &str) -> Option<&'static ModelDescriptor> {
    ALL.iter().copied().find(|d| d.entity_name == entity_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::Projection;
    use std::collections::HashSet;

    #[test]
    fn test_all_descriptors_are_valid() {
        for descriptor in ALL {
            if let Err(e) = descriptor.validate() {
                panic!("{}", e);
            }
        }
    }

    #[test]
    fn test_sortable_fields_are_list_fields() {
        for descriptor in ALL {
            for field in descriptor.sortable_fields {
                assert!(
                    descriptor.list_fields.contains(field),
                    "{}: sortable \"{}\" missing from list_fields",
                    descriptor.entity_name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_excluded_and_hidden_fields_are_list_fields() {
        for descriptor in ALL {
            let mut known: HashSet<String> = HashSet::new();
            for field in descriptor.list_fields {
                known.insert(field.to_string());
                let p = Projection::parse(field).unwrap();
                known.insert(p.root().to_string());
                if let Some(key) = p.column_key() {
                    known.insert(key);
                }
            }
            for field in descriptor
                .excluded_list_fields
                .iter()
                .chain(descriptor.hidden_list_fields)
            {
                assert!(
                    known.contains(*field),
                    "{}: \"{}\" is not a list field",
                    descriptor.entity_name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_entity_names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(|d| d.entity_name).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(find("location").map(|d| d.resolver_name), Some("locations"));
        assert!(find("unknown").is_none());
    }

    #[test]
    fn test_settings_codes_are_unique() {
        let codes: HashSet<String> = ALL.iter().map(|d| d.settings_code(d.page_path)).collect();
        assert_eq!(codes.len(), ALL.len());
        for descriptor in ALL {
            assert!(descriptor.page_path.starts_with('/'), "{}", descriptor.entity_name);
        }
    }
}
