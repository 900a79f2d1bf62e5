//! Active display locale
//!
//! Only the formatting conventions live here; translated strings are served by
//! the label tables of the host page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    EnUs,
    FrFr,
    DeDe,
    RuRu,
}

impl Locale {
    pub fn all() -> [Locale; 4] {
        [Locale::EnUs, Locale::FrFr, Locale::DeDe, Locale::RuRu]
    }

    /// Parse a BCP 47 tag; only the language subtag is significant.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Locale::FrFr,
            "de" => Locale::DeDe,
            "ru" => Locale::RuRu,
            _ => Locale::EnUs,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::RuRu => "ru-RU",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::FrFr => "Français",
            Locale::DeDe => "Deutsch",
            Locale::RuRu => "Русский",
        }
    }

    /// chrono format string for a calendar date
    pub fn date_format(&self) -> &'static str {
        match self {
            Locale::EnUs => "%m/%d/%Y",
            Locale::FrFr => "%d/%m/%Y",
            Locale::DeDe | Locale::RuRu => "%d.%m.%Y",
        }
    }

    /// chrono format string for a date with time
    pub fn datetime_format(&self) -> &'static str {
        match self {
            Locale::EnUs => "%m/%d/%Y %I:%M %p",
            Locale::FrFr => "%d/%m/%Y %H:%M",
            Locale::DeDe | Locale::RuRu => "%d.%m.%Y %H:%M",
        }
    }

    pub fn thousands_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::FrFr => '\u{202f}',
            Locale::DeDe => '.',
            Locale::RuRu => '\u{a0}',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
            _ => ',',
        }
    }
}
