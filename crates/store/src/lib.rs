//! # formsmith-store
//!
//! The stateful side of formsmith: a [`TemplateStore`] that owns all
//! templates and submissions, enforces the template cap, keeps section and
//! field order consistent, stamps `updatedAt`, validates submissions and
//! writes everything through a [`KeyValueStore`](formsmith_storage::KeyValueStore).
//!
//! ```rust
//! use formsmith_schema::prelude::*;
//! use formsmith_storage::MemoryStorage;
//! use formsmith_store::{StoreConfig, StoreError, TemplateStore};
//! use serde_json::json;
//!
//! let mut store = TemplateStore::open(MemoryStorage::new(), StoreConfig::default())?;
//! let survey = store.create_template("Survey", None)?;
//! let intake = store.add_section(survey.id, "Intake")?;
//! let age = store.add_field(survey.id, intake, FieldDef::number("Age").required())?;
//!
//! let rejected = store.submit_form(survey.id, FormValues::new().with_field(age, json!("200")));
//! assert!(matches!(rejected, Err(StoreError::InvalidSubmission { .. })));
//!
//! store.submit_form(survey.id, FormValues::new().with_field(age, json!("30")))?;
//! assert_eq!(store.submissions(Some(survey.id)).len(), 1);
//! # Ok::<(), StoreError>(())
//! ```

mod clock;
mod config;
mod error;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    DEFAULT_MAX_TEMPLATES, DEFAULT_SUBMISSIONS_KEY, DEFAULT_TEMPLATES_KEY, ENV_PREFIX, StoreConfig,
};
pub use error::StoreError;
pub use store::TemplateStore;
