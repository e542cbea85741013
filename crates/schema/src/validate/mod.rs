//! Validation of answers and template structure.
//!
//! - [`FieldValidator`] checks one answer against one field definition.
//! - [`validate_form`] runs it over a field list and collects [`FormErrors`].
//! - [`validate_template`] checks that a template is complete.

pub mod field;
pub mod form;
pub mod policy;
pub mod template;

pub use field::{FieldValidator, MAX_TEXT_LENGTH, validate_field};
pub use form::{FormErrors, validate_form, validate_template_values};
pub use policy::{NumberBand, NumberPolicy};
pub use template::{MAX_TEMPLATE_NAME_LENGTH, validate_template};
