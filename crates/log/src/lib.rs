//! # Formsmith Log
//!
//! Subscriber setup shared by the formsmith binaries. Library crates only
//! emit `tracing` events; whoever owns `main` decides where they go.
//!
//! ```rust,no_run
//! use formsmith_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     let _guard = formsmith_log::auto_init()?;
//!     info!(templates = 3, "store opened");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, ENV_FORMAT, ENV_LEVEL};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{LogError, LogResult, auto_init, init, init_with};
    pub use tracing::{debug, error, info, trace, warn};
}

#[cfg(test)]
static TEST_INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

/// Picks a configuration from the environment and installs it.
///
/// `FORMSMITH_LOG` or `RUST_LOG` switch to [`Config::from_env`]. Otherwise
/// debug builds get [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    #[cfg(test)]
    {
        TEST_INIT.get_or_init(|| ());
        if tracing::dispatcher::has_been_set() {
            return Ok(LoggerGuard::noop());
        }
    }

    if std::env::var_os(ENV_LEVEL).is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Installs [`Config::default`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Installs `config` as the global subscriber.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Installs the test preset once per process.
#[cfg(test)]
pub fn init_test() -> LogResult<LoggerGuard> {
    TEST_INIT.get_or_init(|| ());
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    init_with(Config::test())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_test_is_idempotent() {
        let _first = init_test().unwrap();
        let _second = init_test().unwrap();
        info!("still logging");
    }
}
