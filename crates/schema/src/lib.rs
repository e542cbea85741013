//! # formsmith-schema
//!
//! The form template model and its validation rules.
//!
//! A [`Template`](template::Template) owns ordered
//! [`Section`](section::Section)s, each owning ordered
//! [`FieldDef`](field::FieldDef)s. Answers are collected in
//! [`FormValues`](values::FormValues) keyed by field id and stored as
//! [`FormSubmission`](submission::FormSubmission)s.
//!
//! ```rust
//! use chrono::Utc;
//! use formsmith_schema::prelude::*;
//! use serde_json::json;
//!
//! let age = FieldDef::number("Age").required();
//! let template = Template::new("Survey", None, Utc::now())
//!     .with_section(Section::new("Intake").with_field(age.clone()));
//!
//! let errors = validate_template_values(&template, &FormValues::new());
//! assert_eq!(errors.message(age.id()), Some("Age is required"));
//!
//! let values = FormValues::new().with_field(age.id(), json!("200"));
//! let errors = validate_template_values(&template, &values);
//! assert_eq!(errors.message(age.id()), Some("Age must be between 0 and 150"));
//! ```

// ValidationError is returned by value from every check; boxing it would
// add an allocation per failed field.
#![allow(clippy::result_large_err)]

pub mod error;
pub mod field;
pub mod id;
pub mod kind;
pub mod palette;
pub mod section;
pub mod submission;
pub mod template;
pub mod validate;
pub mod values;

pub mod prelude {
    pub use crate::error::SchemaError;
    pub use crate::field::{
        BooleanField, EnumField, FieldDef, FieldMetadata, LabelField, NumberField, TextField,
    };
    pub use crate::id::{FieldId, SectionId, SubmissionId, TemplateId};
    pub use crate::kind::{FieldKind, LabelStyle};
    pub use crate::palette::{FIELD_PALETTE, FieldTypeInfo};
    pub use crate::section::Section;
    pub use crate::submission::FormSubmission;
    pub use crate::template::Template;
    pub use crate::validate::{
        FieldValidator, FormErrors, NumberPolicy, validate_field, validate_form,
        validate_template, validate_template_values,
    };
    pub use crate::values::FormValues;

    pub use formsmith_validator::foundation::ValidationError;
}
