//! Resolved version specification
//!
//! A resolved spec needs no further lookup: it is an exact version, a named
//! alias (`latest`, `stable`, ...), or the canary channel.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CANARY_NAME, LATEST_ALIAS};
use crate::version::alias::is_alias;
use crate::version::error::VersionParseError;
use crate::version::normalize::normalize;
use crate::version::unresolved::UnresolvedVersionSpec;

/// A version or alias that needs no further resolution
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResolvedVersionSpec {
    /// An alias that maps to a version, such as `latest`
    Alias(String),
    /// The `canary` alias
    Canary,
    /// A fully-qualified semantic version
    Version(Version),
}

impl ResolvedVersionSpec {
    /// Parse a string into a resolved spec, in order:
    ///
    /// - `canary` maps to [`ResolvedVersionSpec::Canary`]
    /// - an alias (see [`is_alias`]) maps to [`ResolvedVersionSpec::Alias`]
    /// - anything else must be a full `major.minor.patch` version
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        if raw == CANARY_NAME {
            return Ok(Self::Canary);
        }

        let value = normalize(raw);

        if is_alias(&value) {
            debug!("Classified '{}' as alias '{}'", raw, value);
            return Ok(Self::Alias(value));
        }

        let version = Version::parse(&value).map_err(|e| VersionParseError::new(&value, e))?;

        debug!("Classified '{}' as version {}", raw, version);

        Ok(Self::Version(version))
    }

    /// The canonical text of the spec, used for equality and serialization
    pub fn canonical_form(&self) -> String {
        self.to_string()
    }

    /// Return the exact version, if this spec is one
    pub fn as_version(&self) -> Option<&Version> {
        match self {
            Self::Version(version) => Some(version),
            _ => None,
        }
    }

    /// Return true if this spec is the provided alias
    pub fn is_alias(&self, name: &str) -> bool {
        match self {
            Self::Alias(alias) => alias == name,
            Self::Canary => name == CANARY_NAME,
            Self::Version(_) => false,
        }
    }

    /// Return true if this spec is canary, either as a variant or an alias
    pub fn is_canary(&self) -> bool {
        self.is_alias(CANARY_NAME)
    }

    /// Return true if this spec is the `latest` alias
    pub fn is_latest(&self) -> bool {
        self.is_alias(LATEST_ALIAS)
    }

    /// Convert into the equivalent unresolved spec. Never fails.
    pub fn to_unresolved_spec(&self) -> UnresolvedVersionSpec {
        match self {
            Self::Alias(alias) => UnresolvedVersionSpec::Alias(alias.clone()),
            Self::Canary => UnresolvedVersionSpec::Canary,
            Self::Version(version) => UnresolvedVersionSpec::Version(version.clone()),
        }
    }
}

impl Default for ResolvedVersionSpec {
    /// Returns a `latest` alias.
    fn default() -> Self {
        Self::Alias(LATEST_ALIAS.to_owned())
    }
}

impl fmt::Display for ResolvedVersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias(alias) => write!(f, "{alias}"),
            Self::Canary => write!(f, "{CANARY_NAME}"),
            Self::Version(version) => write!(f, "{version}"),
        }
    }
}

impl FromStr for ResolvedVersionSpec {
    type Err = VersionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ResolvedVersionSpec {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResolvedVersionSpec> for String {
    fn from(spec: ResolvedVersionSpec) -> Self {
        spec.to_string()
    }
}

impl From<Version> for ResolvedVersionSpec {
    fn from(version: Version) -> Self {
        Self::Version(version)
    }
}

impl PartialEq for ResolvedVersionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_form() == other.canonical_form()
    }
}

impl Eq for ResolvedVersionSpec {}

impl Hash for ResolvedVersionSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl PartialEq<&str> for ResolvedVersionSpec {
    fn eq(&self, other: &&str) -> bool {
        self.canonical_form() == *other
    }
}

impl PartialEq<Version> for ResolvedVersionSpec {
    fn eq(&self, other: &Version) -> bool {
        self.as_version() == Some(other)
    }
}

impl PartialOrd for ResolvedVersionSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResolvedVersionSpec {
    /// Aliases (canary included) sort before versions, by name.
    /// Versions sort by semver precedence.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Version(left), Self::Version(right)) => left.cmp(right),
            (Self::Version(_), _) => Ordering::Greater,
            (_, Self::Version(_)) => Ordering::Less,
            _ => self.canonical_form().cmp(&other.canonical_form()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn canary_literal_maps_to_canary() {
        assert!(matches!(
            ResolvedVersionSpec::parse("canary").unwrap(),
            ResolvedVersionSpec::Canary
        ));
    }

    #[test]
    fn canary_equals_canary_alias() {
        assert_eq!(
            ResolvedVersionSpec::Canary,
            ResolvedVersionSpec::Alias("canary".to_string())
        );
        assert!(ResolvedVersionSpec::Alias("canary".to_string()).is_canary());
    }

    #[rstest]
    #[case("latest")]
    #[case("stable")]
    #[case("legacy-2023")]
    #[case("future/202x")]
    fn parses_aliases(#[case] input: &str) {
        assert_eq!(
            ResolvedVersionSpec::parse(input).unwrap(),
            ResolvedVersionSpec::Alias(input.to_string())
        );
    }

    #[rstest]
    #[case("1.2.3", Version::new(1, 2, 3))]
    #[case("v1.2.3", Version::new(1, 2, 3))]
    #[case(" V4.5.6 ", Version::new(4, 5, 6))]
    fn parses_versions(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(
            ResolvedVersionSpec::parse(input).unwrap(),
            ResolvedVersionSpec::Version(expected)
        );
    }

    #[test]
    fn version_keeps_prerelease_and_build() {
        let spec = ResolvedVersionSpec::parse("1.2.3-rc.1+build.5").unwrap();

        assert_eq!(spec.to_string(), "1.2.3-rc.1+build.5");
    }

    #[rstest]
    #[case("1.2")]
    #[case("1")]
    #[case("%")]
    #[case("")]
    fn rejects_partial_or_invalid_versions(#[case] input: &str) {
        assert!(ResolvedVersionSpec::parse(input).is_err());
    }

    #[test]
    fn error_carries_offending_input() {
        let err = ResolvedVersionSpec::parse("v1.2").unwrap_err();

        assert_eq!(err.input(), "1.2");
    }

    #[test]
    fn default_is_latest() {
        let spec = ResolvedVersionSpec::default();

        assert!(spec.is_latest());
        assert_eq!(spec, "latest");
    }

    #[test]
    fn compares_with_semver_version() {
        let spec = ResolvedVersionSpec::parse("1.2.3").unwrap();

        assert_eq!(spec, Version::new(1, 2, 3));
        assert_ne!(spec, Version::new(1, 2, 4));
        assert_eq!(spec.as_version(), Some(&Version::new(1, 2, 3)));
    }

    #[test]
    fn sorts_aliases_before_versions() {
        let mut specs = vec![
            ResolvedVersionSpec::parse("2.0.0").unwrap(),
            ResolvedVersionSpec::parse("latest").unwrap(),
            ResolvedVersionSpec::parse("1.10.0").unwrap(),
            ResolvedVersionSpec::Canary,
            ResolvedVersionSpec::parse("1.9.0").unwrap(),
        ];
        specs.sort();

        let rendered: Vec<String> = specs.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["canary", "latest", "1.9.0", "1.10.0", "2.0.0"]
        );
    }

    #[test]
    fn converts_to_unresolved() {
        assert_eq!(
            ResolvedVersionSpec::Canary.to_unresolved_spec(),
            UnresolvedVersionSpec::Canary
        );
        assert_eq!(
            ResolvedVersionSpec::parse("stable")
                .unwrap()
                .to_unresolved_spec(),
            UnresolvedVersionSpec::Alias("stable".to_string())
        );
        assert_eq!(
            ResolvedVersionSpec::parse("1.2.3")
                .unwrap()
                .to_unresolved_spec(),
            UnresolvedVersionSpec::Version(Version::new(1, 2, 3))
        );
    }

    #[test]
    fn serializes_as_string() {
        let spec = ResolvedVersionSpec::parse("v1.2.3").unwrap();

        assert_eq!(serde_json::to_string(&spec).unwrap(), "\"1.2.3\"");
        assert_eq!(
            serde_json::from_str::<ResolvedVersionSpec>("\"canary\"").unwrap(),
            ResolvedVersionSpec::Canary
        );
        assert!(serde_json::from_str::<ResolvedVersionSpec>("\"1.2\"").is_err());
    }
}
