//! Fallback display text for label keys
//!
//! Label keys look like `d:expectedDeliveryDate` (namespace, colon, key). The
//! host page may provide translations; without one the key is humanized.

use std::collections::HashMap;

/// Humanize a camelCase or snake_case identifier: `expectedDeliveryDate` -> `Expected delivery date`
pub fn humanize(ident: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in ident.chars() {
        if c == '_' || c == '.' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.extend(c.to_lowercase());
        } else {
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let sentence = words.join(" ");
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip the namespace of a label key
pub fn key_name(label_key: &str) -> &str {
    label_key
        .split_once(':')
        .map(|(_, name)| name)
        .unwrap_or(label_key)
}

/// Translations keyed by full label key
#[derive(Clone, Debug, Default)]
pub struct LabelTable {
    entries: HashMap<String, String>,
}

impl LabelTable {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn text(&self, label_key: &str) -> String {
        self.entries
            .get(label_key)
            .cloned()
            .unwrap_or_else(|| humanize(key_name(label_key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("expectedDeliveryDate"), "Expected delivery date");
        assert_eq!(humanize("stockOwner_name"), "Stock owner name");
        assert_eq!(humanize("id"), "Id");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_label_table_fallback() {
        let table = LabelTable::from_entries([("d:status", "Statut")]);
        assert_eq!(table.text("d:status"), "Statut");
        assert_eq!(table.text("d:stockOwner"), "Stock owner");
        assert_eq!(table.text("name"), "Name");
    }
}
