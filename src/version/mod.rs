//! Version specification model
//!
//! This module classifies, normalizes, and compares version identifiers
//! supplied by users or tools.
//!
//! # Architecture
//!
//! ```text
//!  raw string
//!      │
//!      ▼
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────────┐
//! │  Normalize  │────▶│    Alias    │────▶│ Resolved / Unresolved│
//! │   (clean)   │     │  (classify) │     │   version spec       │
//! └─────────────┘     └─────────────┘     └──────────────────────┘
//!                                                  │
//!                                                  ▼
//!                                          ┌─────────────┐
//!                                          │    Range    │
//!                                          │ (canonical) │
//!                                          └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalize`]: Pure string transforms applied before classification
//! - [`alias`]: Alias vs numeric classification
//! - [`range`]: Canonicalized OR-of-AND requirement ranges
//! - [`resolved`]: Versions and aliases needing no further lookup
//! - [`unresolved`]: Versions, aliases, and requirements still to be resolved
//! - [`error`]: Error types for parsing and conversion

pub mod alias;
pub mod error;
pub mod normalize;
pub mod range;
pub mod resolved;
pub mod unresolved;

pub use alias::is_alias;
pub use error::{OperationError, VersionParseError};
pub use normalize::normalize;
pub use range::VersionRange;
pub use resolved::ResolvedVersionSpec;
pub use unresolved::UnresolvedVersionSpec;
