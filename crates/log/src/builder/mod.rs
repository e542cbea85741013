//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Keeps the root span entered for as long as it lives.
///
/// Hold it in `main`; dropping it early detaches later events from the
/// `service` field.
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerGuard {
    /// A guard that holds nothing, for when a subscriber already exists.
    pub const fn noop() -> Self {
        Self { root_span: None }
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("root_span", &self.root_span.is_some())
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the level filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] when the level string does not parse and
    /// [`LogError::Init`] when a global subscriber is already set.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(pretty, display, std::io::stderr))
                .try_init(),
            Format::Compact => Registry::default()
                .with(filter)
                .with(create_fmt_layer!(compact, display, std::io::stderr))
                .try_init(),
            Format::Json => Registry::default()
                .with(filter)
                .with(create_json_layer!(display, std::io::stderr))
                .try_init(),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard { root_span })
    }
}
