//! Whole-form validation.

use formsmith_validator::foundation::ValidationError;
use indexmap::IndexMap;
use serde::Serialize;

use crate::field::FieldDef;
use crate::id::FieldId;
use crate::template::Template;
use crate::validate::field::FieldValidator;
use crate::values::FormValues;

/// Per-field errors of one form, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: IndexMap<FieldId, ValidationError>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&ValidationError> {
        self.errors.get(&id)
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn message(&self, id: FieldId) -> Option<&str> {
        self.get(id).map(ValidationError::message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationError)> {
        self.errors.iter().map(|(id, err)| (*id, err))
    }

    /// Field id string to message, in declaration order.
    #[must_use]
    pub fn messages(&self) -> IndexMap<String, String> {
        self.errors
            .iter()
            .map(|(id, err)| (id.to_string(), err.message().to_owned()))
            .collect()
    }

    fn insert(&mut self, id: FieldId, error: ValidationError) {
        self.errors.insert(id, error);
    }
}

impl Serialize for FormErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in self.errors.values() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            f.write_str(err.message())?;
        }
        Ok(())
    }
}

impl FieldValidator {
    /// Validates every value-carrying field against `values`. Labels are
    /// skipped and a missing key counts as an absent value.
    pub fn validate_all<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a FieldDef>,
        values: &FormValues,
    ) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in fields.into_iter().filter(|f| f.kind().has_value()) {
            if let Err(err) = self.validate(field, values.for_field(field.id())) {
                errors.insert(field.id(), err);
            }
        }
        errors
    }

    /// Validates every field of every section, in section then field order.
    #[must_use]
    pub fn validate_template_values(&self, template: &Template, values: &FormValues) -> FormErrors {
        self.validate_all(template.fields(), values)
    }
}

/// [`FieldValidator::validate_all`] with the default number policy.
pub fn validate_form<'a>(
    fields: impl IntoIterator<Item = &'a FieldDef>,
    values: &FormValues,
) -> FormErrors {
    FieldValidator::default().validate_all(fields, values)
}

/// [`FieldValidator::validate_template_values`] with the default number policy.
#[must_use]
pub fn validate_template_values(template: &Template, values: &FormValues) -> FormErrors {
    FieldValidator::default().validate_template_values(template, values)
}
