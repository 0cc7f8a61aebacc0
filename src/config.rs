use serde::Deserialize;

// =============================================================================
// Well-known aliases
// =============================================================================

/// Alias of the nightly/unstable build channel
pub const CANARY_NAME: &str = "canary";

/// Alias used when no version is specified
pub const LATEST_ALIAS: &str = "latest";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the log filter (`debug`, `version_spec=trace`, ...)
pub const LOG_ENV: &str = "VERSION_SPEC_LOG";

/// Environment variable selecting the log format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "VERSION_SPEC_LOG_FORMAT";

/// Default log filter when nothing is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output format of log records
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Build the configuration from `VERSION_SPEC_LOG` and `VERSION_SPEC_LOG_FORMAT`.
    pub fn from_env() -> Self {
        log_config_with_env(
            std::env::var(LOG_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    /// Raise the level to `debug` when verbose output is requested
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = "debug".to_string();
        }
        self
    }
}

fn log_config_with_env(level: Option<String>, format: Option<String>) -> LogConfig {
    let defaults = LogConfig::default();

    LogConfig {
        level: level
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(defaults.level),
        format: format
            .as_deref()
            .and_then(LogFormat::from_name)
            .unwrap_or(defaults.format),
    }
}
