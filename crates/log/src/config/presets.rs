//! Configuration presets

use super::{Config, DisplayConfig, Format};

/// Level filter variable, checked before `RUST_LOG`.
pub const ENV_LEVEL: &str = "FORMSMITH_LOG";

/// Format variable: `pretty`, `compact` or `json`.
pub const ENV_FORMAT: &str = "FORMSMITH_LOG_FORMAT";

impl Config {
    /// Reads the process environment. See [`Config::from_lookup`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from variables resolved by `lookup`.
    ///
    /// The level comes from `FORMSMITH_LOG`, then `RUST_LOG`, then `info`.
    /// An unrecognised `FORMSMITH_LOG_FORMAT` falls back to compact.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = lookup(ENV_LEVEL)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let format = lookup(ENV_FORMAT)
            .and_then(|name| name.parse().ok())
            .unwrap_or(Format::Compact);

        let mut display = DisplayConfig::default();
        display.apply_env(&lookup);

        Self {
            level,
            format,
            display,
            service: lookup("FORMSMITH_LOG_SERVICE"),
        }
    }

    /// Debug level, pretty output with source locations.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Info level JSON without colors or source locations.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Everything at trace level, compact and uncolored.
    #[cfg(test)]
    pub(crate) fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
