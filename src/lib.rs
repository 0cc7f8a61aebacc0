//! version-spec - version specification model for tool-version-manager plugins
//!
//! Parses user or tool supplied version strings (`v1.2.3`, `1.2`, `latest`,
//! `canary`, `^1.2 || ~1`) into resolved or unresolved specs that compare
//! equal whenever their canonical forms match.

pub mod cli;
pub mod config;
pub mod version;

pub use version::{
    OperationError, ResolvedVersionSpec, UnresolvedVersionSpec, VersionParseError, VersionRange,
    is_alias, normalize,
};
