//! Configuration schema definitions.
//!
//! The logger needs very little configuration: the raw allow-list string and
//! whether color is suppressed. Both derive Serde traits so the same value can
//! be embedded in a host application's config file.

use serde::{Deserialize, Serialize};

/// Environment variable holding the primary allow-list.
pub const DEBUG_VAR: &str = "DEBUG";

/// Tool-specific alias for the allow-list, joined after `DEBUG`.
pub const KEMBA_VAR: &str = "KEMBA";

/// Any non-empty value disables color output.
pub const NOCOLOR_VAR: &str = "NOCOLOR";

/// Process-wide logger configuration, read once per logger construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Comma-separated allow-list of exact tags and `*` patterns.
    pub allowed: String,

    /// Suppress color escapes regardless of terminal support.
    pub no_color: bool,
}

impl LoggerConfig {
    /// Create a config from an allow-list with color left on.
    pub fn new(allowed: impl Into<String>) -> Self {
        Self {
            allowed: allowed.into(),
            no_color: false,
        }
    }

    /// Builder-style color suppression.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Resolve a config from the raw values of `DEBUG`, `KEMBA` and `NOCOLOR`.
    ///
    /// Empty values count as unset. When both allow-list values are present
    /// they are joined with a comma, `DEBUG` first.
    pub fn from_vars(debug: Option<&str>, kemba: Option<&str>, nocolor: Option<&str>) -> Self {
        let allowed = [debug, kemba]
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        Self {
            allowed,
            no_color: nocolor.is_some_and(|v| !v.is_empty()),
        }
    }

    /// Read the current process environment.
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_VAR).ok();
        let kemba = std::env::var(KEMBA_VAR).ok();
        let nocolor = std::env::var(NOCOLOR_VAR).ok();
        Self::from_vars(debug.as_deref(), kemba.as_deref(), nocolor.as_deref())
    }

    /// True when no pattern is configured; every logger will be disabled.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

/// Where a logger obtains its configuration.
///
/// Extended loggers re-read from the same source, so an `Env` logger picks up
/// the environment as it is at extension time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Read `DEBUG`/`KEMBA`/`NOCOLOR` on every construction.
    #[default]
    Env,
    /// A fixed value, e.g. loaded from a file or built in a test.
    Fixed(LoggerConfig),
}

impl ConfigSource {
    /// Produce the configuration for a new logger.
    pub fn load(&self) -> LoggerConfig {
        match self {
            ConfigSource::Env => LoggerConfig::from_env(),
            ConfigSource::Fixed(config) => config.clone(),
        }
    }
}

impl From<LoggerConfig> for ConfigSource {
    fn from(config: LoggerConfig) -> Self {
        ConfigSource::Fixed(config)
    }
}
