//! Command line interface for inspecting version specifications
//!
//! Commands return their output as an [`Outcome`] instead of printing, so
//! they can be tested without spawning the binary.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use semver::Version;
use serde::Serialize;
use tracing::{debug, warn};

use crate::version::normalize::{normalize, strip_version_prefix};
use crate::version::{ResolvedVersionSpec, UnresolvedVersionSpec};

#[derive(Parser, Debug)]
#[command(name = "version-spec")]
#[command(version, about = "Inspect and compare tool version specifications")]
pub struct Cli {
    /// Enable debug logging (overrides VERSION_SPEC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the normalized form of a version string
    Normalize { input: String },

    /// Classify a version string and print its canonical form
    Parse {
        input: String,

        /// Parse as a resolved spec (exact version, alias, or canary)
        #[arg(long)]
        resolved: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether two version strings denote the same spec
    Compare {
        left: String,
        right: String,

        /// Parse both sides as resolved specs
        #[arg(long)]
        resolved: bool,
    },

    /// Report which versions satisfy a spec
    Check {
        spec: String,

        #[arg(required = true)]
        versions: Vec<String>,
    },
}

/// Result of a command: text to print and whether it succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

/// JSON shape printed by `parse --json`
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    kind: &'a str,
    spec: String,
}

/// Run a command
pub fn run(command: &Command) -> anyhow::Result<Outcome> {
    debug!("Running command: {:?}", command);

    match command {
        Command::Normalize { input } => Ok(Outcome::ok(normalize(input))),
        Command::Parse {
            input,
            resolved,
            json,
        } => parse(input, *resolved, *json),
        Command::Compare {
            left,
            right,
            resolved,
        } => compare(left, right, *resolved),
        Command::Check { spec, versions } => check(spec, versions),
    }
}

fn parse(input: &str, resolved: bool, json: bool) -> anyhow::Result<Outcome> {
    let (kind, spec) = if resolved {
        let spec = ResolvedVersionSpec::parse(input)?;
        (resolved_kind(&spec), spec.to_string())
    } else {
        let spec = UnresolvedVersionSpec::parse(input)?;
        (unresolved_kind(&spec), spec.to_string())
    };

    if json {
        let report = ParseReport { kind, spec };
        return Ok(Outcome::ok(serde_json::to_string(&report)?));
    }

    Ok(Outcome::ok(format!("{kind}: {spec}")))
}

fn compare(left: &str, right: &str, resolved: bool) -> anyhow::Result<Outcome> {
    let equal = if resolved {
        ResolvedVersionSpec::parse(left)? == ResolvedVersionSpec::parse(right)?
    } else {
        UnresolvedVersionSpec::parse(left)? == UnresolvedVersionSpec::parse(right)?
    };

    Ok(Outcome {
        output: if equal { "equal" } else { "not equal" }.to_string(),
        success: equal,
    })
}

fn check(spec: &str, versions: &[String]) -> anyhow::Result<Outcome> {
    let spec = UnresolvedVersionSpec::parse(spec)?;

    if matches!(
        spec,
        UnresolvedVersionSpec::Alias(_) | UnresolvedVersionSpec::Canary
    ) {
        warn!("Rejected alias '{}' in check, no known versions to resolve it", spec);
        bail!("Alias '{spec}' can only be resolved against a manifest of known versions");
    }

    let mut lines = Vec::with_capacity(versions.len());
    let mut any_satisfied = false;

    for raw in versions {
        let version = Version::parse(strip_version_prefix(raw.trim()))
            .inspect_err(|e| warn!("Rejected '{}' in check, not a version: {}", raw, e))
            .with_context(|| format!("Invalid version '{raw}'"))?;

        let satisfied = match &spec {
            UnresolvedVersionSpec::Version(expected) => expected == &version,
            UnresolvedVersionSpec::Req(range) | UnresolvedVersionSpec::ReqAny(range) => {
                range.matches(&version)
            }
            UnresolvedVersionSpec::Alias(_) | UnresolvedVersionSpec::Canary => false,
        };

        any_satisfied |= satisfied;
        lines.push(format!(
            "{version}: {}",
            if satisfied { "satisfied" } else { "not satisfied" }
        ));
    }

    Ok(Outcome {
        output: lines.join("\n"),
        success: any_satisfied,
    })
}

fn resolved_kind(spec: &ResolvedVersionSpec) -> &'static str {
    match spec {
        ResolvedVersionSpec::Alias(_) => "alias",
        ResolvedVersionSpec::Canary => "canary",
        ResolvedVersionSpec::Version(_) => "version",
    }
}

fn unresolved_kind(spec: &UnresolvedVersionSpec) -> &'static str {
    match spec {
        UnresolvedVersionSpec::Alias(_) => "alias",
        UnresolvedVersionSpec::Canary => "canary",
        UnresolvedVersionSpec::Version(_) => "version",
        UnresolvedVersionSpec::Req(_) => "req",
        UnresolvedVersionSpec::ReqAny(_) => "req-any",
    }
}
