//! Descriptor invariants and filter input validation

use super::descriptor::{matches_field, ModelDescriptor};
use super::field_kind::{FieldKind, FieldValue};
use super::projection::{Projection, ProjectionError};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Configuration defect in a model descriptor
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("{entity}: invalid projection \"{field}\": {source}")]
    InvalidProjection {
        entity: &'static str,
        field: &'static str,
        #[source]
        source: ProjectionError,
    },

    #[error("{entity}: list field \"{field}\" selects more than one leaf")]
    BranchingProjection {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: duplicate list field \"{field}\"")]
    DuplicateListField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: sortable field \"{field}\" is not a list field")]
    SortableNotListed {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: excluded field \"{field}\" is not a list field")]
    ExcludedNotListed {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: hidden field \"{field}\" is not a list field")]
    HiddenNotListed {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: filter field \"{field}\": {reason}")]
    InvalidFilterField {
        entity: &'static str,
        field: &'static str,
        reason: &'static str,
    },
}

impl ModelDescriptor {
    /// Check every static invariant of the descriptor and return the first violation.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let entity = self.entity_name;

        let projections = self.list_projections()?;
        for (&field, projection) in self.list_fields.iter().zip(&projections) {
            if projection.path().is_none() {
                return Err(DescriptorError::BranchingProjection { entity, field });
            }
        }

        let mut keys: Vec<String> = Vec::with_capacity(projections.len());
        for (&field, projection) in self.list_fields.iter().zip(&projections) {
            let key = projection.column_key().unwrap_or_default();
            if keys.contains(&key) {
                return Err(DescriptorError::DuplicateListField { entity, field });
            }
            keys.push(key);
        }

        let listed = |candidate: &str| self.list_fields.iter().any(|f| matches_field(f, candidate));

        if let Some(field) = self.sortable_fields.iter().copied().find(|f| !listed(*f)) {
            return Err(DescriptorError::SortableNotListed { entity, field });
        }
        if let Some(field) = self.excluded_list_fields.iter().copied().find(|f| !listed(*f)) {
            return Err(DescriptorError::ExcludedNotListed { entity, field });
        }
        if let Some(field) = self.hidden_list_fields.iter().copied().find(|f| !listed(*f)) {
            return Err(DescriptorError::HiddenNotListed { entity, field });
        }

        for filter in self.filter_fields {
            filter.check_definition(entity)?;
        }

        Ok(())
    }
}

/// Rejected user input for a filter or form field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldInputError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be a whole number")]
    NotAnInteger { field: &'static str },

    #[error("{field} must be at least {min}")]
    BelowMin { field: &'static str, min: f64 },

    #[error("{field} must be at most {max}")]
    AboveMax { field: &'static str, max: f64 },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: unknown option \"{value}\"")]
    UnknownOption { field: &'static str, value: String },

    #[error("{field}: invalid date \"{value}\"")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be true or false")]
    NotABoolean { field: &'static str },
}

/// Filterable input on a list screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterField {
    /// GraphQL filter key
    pub name: &'static str,
    pub label_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FilterField {
    pub const fn new(name: &'static str, label_key: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label_key,
            kind,
            required: false,
        }
    }

    fn check_definition(&self, entity: &'static str) -> Result<(), DescriptorError> {
        let invalid = |reason| DescriptorError::InvalidFilterField {
            entity,
            field: self.name,
            reason,
        };

        if Projection::parse(self.name).is_err() {
            return Err(invalid("name is not a field identifier"));
        }
        match self.kind {
            FieldKind::Text { max_length: Some(0) } => Err(invalid("max_length must be positive")),
            FieldKind::Number {
                min: Some(min),
                max: Some(max),
                ..
            } if min > max => Err(invalid("min is greater than max")),
            FieldKind::Dropdown { options } if options.is_empty() => {
                Err(invalid("dropdown has no options"))
            }
            _ => Ok(()),
        }
    }

    /// Parse raw input. Blank input yields `Ok(None)` unless the field is required.
    pub fn parse_input(&self, raw: &str) -> Result<Option<FieldValue>, FieldInputError> {
        let field = self.name;
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(FieldInputError::Required { field })
            } else {
                Ok(None)
            };
        }

        let value = match self.kind {
            FieldKind::Text { max_length } => {
                if let Some(max) = max_length {
                    if raw.chars().count() > max {
                        return Err(FieldInputError::TooLong { field, max });
                    }
                }
                FieldValue::Text(raw.to_string())
            }
            FieldKind::Number { min, max, integer } => {
                let n: f64 = raw
                    .replace(',', ".")
                    .parse()
                    .map_err(|_| FieldInputError::NotANumber { field })?;
                if !n.is_finite() {
                    return Err(FieldInputError::NotANumber { field });
                }
                if integer && n.fract() != 0.0 {
                    return Err(FieldInputError::NotAnInteger { field });
                }
                if let Some(min) = min {
                    if n < min {
                        return Err(FieldInputError::BelowMin { field, min });
                    }
                }
                if let Some(max) = max {
                    if n > max {
                        return Err(FieldInputError::AboveMax { field, max });
                    }
                }
                FieldValue::Number(n)
            }
            FieldKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => FieldValue::Boolean(true),
                "false" | "0" | "no" => FieldValue::Boolean(false),
                _ => return Err(FieldInputError::NotABoolean { field }),
            },
            FieldKind::Dropdown { options } => {
                if !options.iter().any(|o| o.value == raw) {
                    return Err(FieldInputError::UnknownOption {
                        field,
                        value: raw.to_string(),
                    });
                }
                FieldValue::Text(raw.to_string())
            }
            FieldKind::Calendar { with_time: false } => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|_| FieldInputError::InvalidDate {
                    field,
                    value: raw.to_string(),
                })?,
            FieldKind::Calendar { with_time: true } => {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
                    .map(FieldValue::DateTime)
                    .map_err(|_| FieldInputError::InvalidDate {
                        field,
                        value: raw.to_string(),
                    })?
            }
        };

        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{DefaultSort, DropdownOption, Endpoints};

    const ENDPOINTS: Endpoints = Endpoints {
        list: "things",
        detail: "thing",
        create: "createThing",
        update: "updateThing",
        delete: "deleteThing",
        export: None,
    };

    const BASE: ModelDescriptor = ModelDescriptor {
        entity_name: "thing",
        table_name: "thing",
        resolver_name: "Thing",
        page_path: "/things",
        endpoints: ENDPOINTS,
        list_fields: &["id", "name", "stockOwner{name}", "created"],
        detail_fields: &["id", "name"],
        sortable_fields: &["name", "created"],
        excluded_list_fields: &["id"],
        excluded_detail_fields: &[],
        hidden_list_fields: &["stockOwner"],
        displayed_labels: &[],
        detail_groups: &[],
        default_sort: DefaultSort::CREATED_DESC,
        structural_filters: &[],
        filter_fields: &[],
    };

    #[test]
    fn test_valid_descriptor() {
        assert_eq!(BASE.validate(), Ok(()));
    }

    #[test]
    fn test_sortable_must_be_listed() {
        let d = ModelDescriptor {
            sortable_fields: &["name", "weight"],
            ..BASE
        };
        assert_eq!(
            d.validate(),
            Err(DescriptorError::SortableNotListed {
                entity: "thing",
                field: "weight"
            })
        );
    }

    #[test]
    fn test_hidden_and_excluded_must_be_listed() {
        let hidden = ModelDescriptor {
            hidden_list_fields: &["carrier"],
            ..BASE
        };
        assert!(matches!(
            hidden.validate(),
            Err(DescriptorError::HiddenNotListed { field: "carrier", .. })
        ));

        let excluded = ModelDescriptor {
            excluded_list_fields: &["stockOwner_code"],
            ..BASE
        };
        assert!(matches!(
            excluded.validate(),
            Err(DescriptorError::ExcludedNotListed { .. })
        ));
    }

    #[test]
    fn test_branching_and_duplicate_fields() {
        let branching = ModelDescriptor {
            list_fields: &["name", "stockOwner{id name}"],
            ..BASE
        };
        assert!(matches!(
            branching.validate(),
            Err(DescriptorError::BranchingProjection { .. })
        ));

        let duplicate = ModelDescriptor {
            list_fields: &["name", "created", "name"],
            hidden_list_fields: &[],
            ..BASE
        };
        assert!(matches!(
            duplicate.validate(),
            Err(DescriptorError::DuplicateListField { field: "name", .. })
        ));
    }

    #[test]
    fn test_filter_field_definitions() {
        const BAD: &[FilterField] = &[FilterField::new(
            "status",
            "d:status",
            FieldKind::Dropdown { options: &[] },
        )];
        let d = ModelDescriptor {
            filter_fields: BAD,
            ..BASE
        };
        assert!(matches!(
            d.validate(),
            Err(DescriptorError::InvalidFilterField { field: "status", .. })
        ));
    }

    #[test]
    fn test_parse_number_input() {
        let f = FilterField::new(
            "quantity",
            "d:quantity",
            FieldKind::Number {
                min: Some(0.0),
                max: Some(100.0),
                integer: true,
            },
        );
        assert_eq!(f.parse_input(" 42 "), Ok(Some(FieldValue::Number(42.0))));
        assert_eq!(f.parse_input(""), Ok(None));
        assert_eq!(
            f.parse_input("abc"),
            Err(FieldInputError::NotANumber { field: "quantity" })
        );
        assert_eq!(
            f.parse_input("1.5"),
            Err(FieldInputError::NotAnInteger { field: "quantity" })
        );
        assert_eq!(
            f.parse_input("101"),
            Err(FieldInputError::AboveMax {
                field: "quantity",
                max: 100.0
            })
        );
    }

    #[test]
    fn test_parse_required_dropdown_and_dates() {
        const OPTIONS: &[DropdownOption] = &[
            DropdownOption { value: "1000", label: "d:inProgress" },
            DropdownOption { value: "2000", label: "d:closed" },
        ];
        let mut status = FilterField::new("status", "d:status", FieldKind::Dropdown { options: OPTIONS });
        status.required = true;
        assert_eq!(
            status.parse_input(" "),
            Err(FieldInputError::Required { field: "status" })
        );
        assert_eq!(
            status.parse_input("2000"),
            Ok(Some(FieldValue::Text("2000".into())))
        );
        assert!(matches!(
            status.parse_input("3000"),
            Err(FieldInputError::UnknownOption { .. })
        ));

        let created = FilterField::new("created", "d:created", FieldKind::DATE);
        assert_eq!(
            created.parse_input("2024-03-15"),
            Ok(Some(FieldValue::Date(
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
            )))
        );
        assert!(matches!(
            created.parse_input("15/03/2024"),
            Err(FieldInputError::InvalidDate { .. })
        ));
    }
}
