//! Alias detection for normalized version strings
//!
//! An alias is a word that maps to a version at resolution time, for example
//! `latest` -> `1.2.3`. Numeric strings (`1.2.3`, `1`, `1-3`) are never aliases.

/// Returns true if the value should be treated as an alias.
///
/// The value must start with an ASCII letter, followed by at least one ASCII
/// alphanumeric character or one of `-`, `_`, `/`, `.`, `*`. Only the start
/// of the value is checked: `ab%` is an alias, `a%` is not.
pub fn is_alias(value: &str) -> bool {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first.is_ascii_alphabetic() && is_alias_char(second),
        _ => false,
    }
}

fn is_alias_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | '*')
}
