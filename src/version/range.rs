//! Canonicalized version requirement ranges
//!
//! A range is an OR of groups, and each group is an AND of comparators:
//!
//! ```text
//! ^1.2 || >=2 <3 || ~4
//! ──┬─    ───┬──    ─┬
//!   │        │       └─ group 3: one comparator
//!   │        └───────── group 2: two comparators (AND)
//!   └────────────────── group 1: one comparator
//! ```
//!
//! Comparators inside a group and the groups themselves are sorted, so that
//! `~1 || 3, 4 || ^1.2` and `^1.2 || 4 3 || ~1` render to the same text.

use std::fmt;
use std::hash::{Hash, Hasher};

use semver::{Comparator, Op, Version, VersionReq};

use crate::version::error::VersionParseError;
use crate::version::normalize::{AND_SEPARATOR, OR_SEPARATOR, normalize};

/// Rendering of a group without any comparator
const WILDCARD: &str = "*";

/// A canonicalized OR-of-AND version requirement
#[derive(Debug, Clone)]
pub struct VersionRange {
    groups: Vec<VersionReq>,
}

impl VersionRange {
    /// Parse a requirement expression into its canonical form.
    ///
    /// Groups are separated by `||`, comparators by commas or whitespace.
    /// Each comparator is parsed with [`VersionReq`], so `1.2` keeps the
    /// caret default of semver requirements (`^1.2`).
    pub fn parse(expression: &str) -> Result<Self, VersionParseError> {
        let expression = normalize(expression);

        let mut canonical = expression
            .split(OR_SEPARATOR)
            .map(canonical_group)
            .collect::<Result<Vec<_>, _>>()?;

        canonical.sort();
        canonical.dedup();

        // Parse the canonical text again, so the stored groups are exactly
        // what the rendered form describes
        let groups = canonical
            .iter()
            .map(|group| parse_group(group))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Build a single AND group from a list of comparators.
    ///
    /// Equivalent to [`VersionRange::parse`] on the comparators joined by a space.
    pub fn from_comparators<I, S>(comparators: I) -> Result<Self, VersionParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expression = comparators
            .into_iter()
            .map(|comparator| comparator.as_ref().trim().to_owned())
            .collect::<Vec<_>>()
            .join(AND_SEPARATOR);

        Self::parse(&expression)
    }

    /// The OR groups of this range, in canonical order
    pub fn groups(&self) -> &[VersionReq] {
        &self.groups
    }

    /// Returns true if the range has a single group
    pub fn is_single_group(&self) -> bool {
        self.groups.len() == 1
    }

    /// Returns true if the range matches every version (`*`)
    pub fn is_any(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.comparators.is_empty())
    }

    /// Check if a version satisfies any of the groups
    pub fn matches(&self, version: &Version) -> bool {
        self.groups.iter().any(|group| group.matches(version))
    }

    /// The canonical text of the range, used for equality
    pub fn canonical_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .groups
            .iter()
            .map(render_group)
            .collect::<Vec<_>>()
            .join(" || ");

        write!(f, "{rendered}")
    }
}

impl PartialEq for VersionRange {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_form() == other.canonical_form()
    }
}

impl Eq for VersionRange {}

impl Hash for VersionRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

/// Render one group of a raw expression into its sorted, space-joined form
fn canonical_group(group: &str) -> Result<String, VersionParseError> {
    let mut comparators = Vec::new();

    for token in group
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let req = VersionReq::parse(token).map_err(|e| VersionParseError::new(token, e))?;

        // `*` parses to a requirement without comparators, which is dropped here
        comparators.extend(req.comparators.iter().map(render_comparator));
    }

    if comparators.is_empty() {
        return Ok(WILDCARD.to_owned());
    }

    comparators.sort();
    comparators.dedup();

    Ok(comparators.join(AND_SEPARATOR))
}

/// Render a comparator so that the text survives [`normalize`].
///
/// `1.2.x` would render as `1.2.*`, which normalization turns into `^1.2`.
/// A wildcard matches the same versions as a tilde on the same parts, so
/// `1.2.*` is written as `~1.2` and `1.*` as `~1`.
fn render_comparator(comparator: &Comparator) -> String {
    if comparator.op != Op::Wildcard {
        return comparator.to_string();
    }

    Comparator {
        op: Op::Tilde,
        ..comparator.clone()
    }
    .to_string()
}

fn parse_group(group: &str) -> Result<VersionReq, VersionParseError> {
    VersionReq::parse(&group.replace(AND_SEPARATOR, ", "))
        .map_err(|e| VersionParseError::new(group, e))
}

fn render_group(group: &VersionReq) -> String {
    if group.comparators.is_empty() {
        return WILDCARD.to_owned();
    }

    group
        .comparators
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(AND_SEPARATOR)
}
