//! Unresolved version specification
//!
//! An unresolved spec may still need to be matched against the list of known
//! versions of a tool: on top of the resolved variants it carries partial
//! versions, requirements, and OR lists of requirements.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CANARY_NAME, LATEST_ALIAS};
use crate::version::alias::is_alias;
use crate::version::error::{OperationError, VersionParseError};
use crate::version::normalize::{OR_SEPARATOR, normalize};
use crate::version::range::VersionRange;
use crate::version::resolved::ResolvedVersionSpec;

/// Characters that open a requirement expression
const REQUIREMENT_PREFIXES: [char; 6] = ['=', '^', '~', '>', '<', '*'];

/// A version, alias, or requirement that may still need resolution
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnresolvedVersionSpec {
    /// An alias that maps to a version, such as `latest`
    Alias(String),
    /// The `canary` alias
    Canary,
    /// A fully-qualified semantic version
    Version(Version),
    /// A single group of comparators (`^1.2`, `~1`, `>=1 <2`)
    Req(VersionRange),
    /// Groups of comparators joined by `||`
    ReqAny(VersionRange),
}

impl UnresolvedVersionSpec {
    /// Parse a string into an unresolved spec. The first matching rule wins:
    ///
    /// - `canary` maps to `Canary`
    /// - an alias (see [`is_alias`]) maps to `Alias`
    /// - a value containing `||` maps to `ReqAny`
    /// - a value containing an AND separator (`,` or ` `) maps to `Req`
    /// - a value starting with `=`, `^`, `~`, `>`, `<`, or `*` maps to `Req`
    /// - a partial version (`1`, `1.2`) maps to a `~` requirement
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

        if value.contains(OR_SEPARATOR) {
            debug!("Classified '{}' as OR requirement '{}'", raw, value);
            return Self::req_any(&value);
        }

        // Commas are already spaces after normalization, both separate comparators
        if value.contains(',') || value.contains(' ') {
            debug!("Classified '{}' as AND requirement '{}'", raw, value);
            return Self::req(&value);
        }

        if value.starts_with(REQUIREMENT_PREFIXES) {
            debug!("Classified '{}' as requirement '{}'", raw, value);
            return Self::req(&value);
        }

        if value.matches('.').count() < 2 {
            debug!("Widening partial version '{}' to '~{}'", raw, value);
            return Self::req(&format!("~{value}"));
        }

        let version = Version::parse(&value).map_err(|e| VersionParseError::new(&value, e))?;

        debug!("Classified '{}' as version {}", raw, version);

        Ok(Self::Version(version))
    }

    /// Build a `Req` from a single group of comparators.
    ///
    /// Expressions with more than one `||` group belong in [`Self::req_any`].
    pub fn req(expression: &str) -> Result<Self, VersionParseError> {
        let range = VersionRange::parse(expression)?;

        if !range.is_single_group() {
            return Err(VersionParseError::MultipleGroups {
                input: expression.to_owned(),
                groups: range.groups().len(),
            });
        }

        Ok(Self::Req(range))
    }

    /// Build a `ReqAny` from an expression of `||` separated groups
    pub fn req_any(expression: &str) -> Result<Self, VersionParseError> {
        Ok(Self::ReqAny(VersionRange::parse(expression)?))
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

    /// Return the requirement range of `Req` and `ReqAny` specs
    pub fn as_range(&self) -> Option<&VersionRange> {
        match self {
            Self::Req(range) | Self::ReqAny(range) => Some(range),
            _ => None,
        }
    }

    /// Return true if this spec is the provided alias
    pub fn is_alias(&self, name: &str) -> bool {
        match self {
            Self::Alias(alias) => alias == name,
            Self::Canary => name == CANARY_NAME,
            _ => false,
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

    /// Return true if this spec is a requirement that must be matched
    /// against a list of versions
    pub fn is_requirement(&self) -> bool {
        matches!(self, Self::Req(_) | Self::ReqAny(_))
    }

    /// Convert into the equivalent resolved spec.
    ///
    /// This does not resolve anything: requirements fail, since picking a
    /// version for them requires the list of known versions.
    pub fn to_resolved_spec(&self) -> Result<ResolvedVersionSpec, OperationError> {
        match self {
            Self::Alias(alias) => Ok(ResolvedVersionSpec::Alias(alias.clone())),
            Self::Canary => Ok(ResolvedVersionSpec::Canary),
            Self::Version(version) => Ok(ResolvedVersionSpec::Version(version.clone())),
            Self::Req(range) | Self::ReqAny(range) => Err(OperationError::InvalidOperation {
                spec: range.to_string(),
            }),
        }
    }
}

impl Default for UnresolvedVersionSpec {
    /// Returns a `latest` alias.
    fn default() -> Self {
        Self::Alias(LATEST_ALIAS.to_owned())
    }
}

impl fmt::Display for UnresolvedVersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias(alias) => write!(f, "{alias}"),
            Self::Canary => write!(f, "{CANARY_NAME}"),
            Self::Version(version) => write!(f, "{version}"),
            Self::Req(range) | Self::ReqAny(range) => write!(f, "{range}"),
        }
    }
}

impl FromStr for UnresolvedVersionSpec {
    type Err = VersionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for UnresolvedVersionSpec {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UnresolvedVersionSpec> for String {
    fn from(spec: UnresolvedVersionSpec) -> Self {
        spec.to_string()
    }
}

impl From<ResolvedVersionSpec> for UnresolvedVersionSpec {
    fn from(spec: ResolvedVersionSpec) -> Self {
        spec.to_unresolved_spec()
    }
}

impl PartialEq for UnresolvedVersionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_form() == other.canonical_form()
    }
}

impl Eq for UnresolvedVersionSpec {}

impl Hash for UnresolvedVersionSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl PartialEq<ResolvedVersionSpec> for UnresolvedVersionSpec {
    fn eq(&self, other: &ResolvedVersionSpec) -> bool {
        !self.is_requirement() && self.canonical_form() == other.canonical_form()
    }
}

impl PartialEq<&str> for UnresolvedVersionSpec {
    fn eq(&self, other: &&str) -> bool {
        self.canonical_form() == *other
    }
}
