//! Digit grouping for numeric table cells

use super::locale::Locale;

/// `true` for plain decimal literals such as `1234`, `-5`, `12.50`.
/// Leading zeros (`007`) are codes, not quantities, and are left alone.
pub fn looks_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return false;
    }
    match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Group the integer digits of a numeric literal by thousands, keeping the
/// fraction digits as given. Non-numeric input is returned unchanged.
pub fn format_numeric_str(s: &str, locale: Locale) -> String {
    if !looks_numeric(s) {
        return s.to_string();
    }
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let separator = locale.thousands_separator();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}{}{}", sign, grouped, locale.decimal_separator(), f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a JSON number; integers lose no precision.
pub fn format_number(value: &serde_json::Number, locale: Locale) -> String {
    format_numeric_str(&value.to_string(), locale)
}
