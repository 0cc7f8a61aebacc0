//! Text normalization applied to raw version strings before classification
//!
//! Handles:
//! - OR lists: `^1 ||~2` -> `^1 || ~2`
//! - Wildcard suffixes: `1.2.*` -> `1.2`, `1.*.*` -> `1`
//! - AND operators: `>=1 && <2` -> `>=1 <2`
//! - Tag prefixes: `v1.2.3` -> `1.2.3`
//! - Comparator spacing: `>= 1.2.3` -> `>=1.2.3`
//! - AND separators: `1, 2`, `1 ,2`, `1  2` -> `1 2`

use std::sync::LazyLock;

use regex::Regex;

/// Separator between OR groups in a requirement expression
pub const OR_SEPARATOR: &str = "||";

/// Separator between comparators of a single OR group, once normalized
pub const AND_SEPARATOR: &str = " ";

/// Whitespace or commas following a comparator operator: `>= 1`, `^ 2`, `<,3`
static COMPARATOR_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([<>]=?|[=^~])[\s,]+").expect("comparator spacing pattern is valid")
});

/// Runs of commas and whitespace between comparators
static AND_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("AND separator pattern is valid"));

/// Normalize a raw version string so that it can be classified.
///
/// The function is total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let value = raw.trim();

    if value.contains(OR_SEPARATOR) {
        return value
            .split(OR_SEPARATOR)
            .map(normalize)
            .collect::<Vec<_>>()
            .join(" || ");
    }

    let mut value = value.to_owned();

    while value.contains(".*") {
        value = value.replace(".*", "");
    }

    let value = value.replace("&&", AND_SEPARATOR);
    let value = COMPARATOR_SPACING.replace_all(&value, "${1}");
    let value = AND_SEPARATORS.replace_all(&value, AND_SEPARATOR);

    strip_version_prefix(value.trim()).to_owned()
}

/// Remove a leading `v` or `V` from tag-style versions (`v1.2.3`).
///
/// Only stripped when a digit follows, so aliases such as `very-new` survive.
pub fn strip_version_prefix(value: &str) -> &str {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some('v' | 'V'), Some(next)) if next.is_ascii_digit() => &value[1..],
        _ => value,
    }
}
