//! Tab keys and their titles.
//!
//! List tabs are keyed `list:{entityName}`, operation forms `form:{name}`.

use contracts::domain::registry;

use crate::shared::labels::humanize;

pub const LIST_PREFIX: &str = "list:";
pub const FORM_CYCLE_COUNT: &str = "form:cycleCount";
pub const FORM_MOVEMENT: &str = "form:movement";

pub fn list_tab_key(entity_name: &str) -> String {
    format!("{}{}", LIST_PREFIX, entity_name)
}

/// Title shown on the tab strip and in the menu. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    match key {
        FORM_CYCLE_COUNT => "New cycle count".to_string(),
        FORM_MOVEMENT => "Bulk movement".to_string(),
        k => match k.strip_prefix(LIST_PREFIX).and_then(registry::find) {
            Some(descriptor) => humanize(descriptor.resolver_name),
            None => k.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label_for_key(&list_tab_key("stockOwner")), "Stock owners");
        assert_eq!(tab_label_for_key(FORM_MOVEMENT), "Bulk movement");
        assert_eq!(tab_label_for_key("list:unknown"), "list:unknown");
    }
}
