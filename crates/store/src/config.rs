//! Store configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `FORMSMITH_*` environment variables (`FORMSMITH_MAX_TEMPLATES=3`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use formsmith_schema::validate::NumberPolicy;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Default cap on the number of templates.
pub const DEFAULT_MAX_TEMPLATES: usize = 5;

/// Default storage key for the template list.
pub const DEFAULT_TEMPLATES_KEY: &str = "form-builder-templates";

/// Default storage key for the submission list.
pub const DEFAULT_SUBMISSIONS_KEY: &str = "form-builder-submissions";

/// Prefix of environment variables read by [`StoreConfig::load`].
pub const ENV_PREFIX: &str = "FORMSMITH_";

/// Settings for a [`TemplateStore`](crate::TemplateStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Most templates that may exist at once.
    pub max_templates: usize,

    /// Storage key holding the JSON template list.
    pub templates_key: String,

    /// Storage key holding the JSON submission list.
    pub submissions_key: String,

    /// Range policy for number fields.
    pub number_policy: NumberPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_templates: DEFAULT_MAX_TEMPLATES,
            templates_key: DEFAULT_TEMPLATES_KEY.to_owned(),
            submissions_key: DEFAULT_SUBMISSIONS_KEY.to_owned(),
            number_policy: NumberPolicy::default(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub const fn with_max_templates(mut self, max: usize) -> Self {
        self.max_templates = max;
        self
    }

    #[must_use]
    pub const fn with_number_policy(mut self, policy: NumberPolicy) -> Self {
        self.number_policy = policy;
        self
    }

    /// The layered provider: defaults, then `file` if given, then the
    /// environment.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads and validates the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if a layer fails to parse and
    /// [`StoreError::InvalidConfig`] if the merged values are unusable.
    pub fn load(file: Option<&Path>) -> Result<Self, StoreError> {
        let config: Self = Self::figment(file)
            .extract()
            .map_err(|e| StoreError::Config(Box::new(e)))?;
        config.validate()?;
        tracing::debug!(?config, "loaded store config");
        Ok(config)
    }

    /// Checks that the values can drive a store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidConfig`] for a zero template cap, an
    /// empty key or both lists sharing one key.
    pub fn validate(&self) -> Result<(), StoreError> {
        let reason = if self.max_templates == 0 {
            Some("max_templates must be at least 1")
        } else if self.templates_key.is_empty() || self.submissions_key.is_empty() {
            Some("storage keys must not be empty")
        } else if self.templates_key == self.submissions_key {
            Some("templates_key and submissions_key must differ")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(StoreError::InvalidConfig {
                reason: reason.to_owned(),
            }),
            None => Ok(()),
        }
    }
}
