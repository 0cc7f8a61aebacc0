use thiserror::Error;

/// Raised when a string cannot be turned into a version or requirement
#[derive(Debug, Error)]
pub enum VersionParseError {
    #[error("Invalid version '{input}': {source}")]
    Semver {
        /// The offending string, after normalization
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Invalid requirement '{input}': expected a single group, found {groups} joined by `||`")]
    MultipleGroups { input: String, groups: usize },
}

impl VersionParseError {
    pub fn new(input: impl Into<String>, source: semver::Error) -> Self {
        Self::Semver {
            input: input.into(),
            source,
        }
    }

    /// The string that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::Semver { input, .. } | Self::MultipleGroups { input, .. } => input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("Invalid operation: requirement '{spec}' cannot be used as a resolved version")]
    InvalidOperation { spec: String },
}
