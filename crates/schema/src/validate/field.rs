//! Single-field validation.

use formsmith_validator::prelude::*;
use serde_json::Value;

use crate::field::FieldDef;
use crate::validate::policy::NumberPolicy;

/// Longest accepted text answer, in characters.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Validates answers against field definitions.
///
/// Stateless apart from the number policy, so one instance can be shared by
/// every form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidator {
    policy: NumberPolicy,
}

impl FieldValidator {
    #[must_use]
    pub const fn new(policy: NumberPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> NumberPolicy {
        self.policy
    }

    /// Validates one answer. `None` and JSON `null` both mean "absent".
    ///
    /// The returned error carries the field id in
    /// [`ValidationError::field`] and a message that starts with the label.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: required, then the type rules.
    pub fn validate(&self, field: &FieldDef, value: Option<&Value>) -> Result<(), ValidationError> {
        self.check(field, value)
            .map_err(|err| err.with_field(field.id().to_string()))
    }

    fn check(&self, field: &FieldDef, value: Option<&Value>) -> Result<(), ValidationError> {
        let label = field.label();
        let value = match value {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        };

        let empty = match value {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };

        if field.is_required() && (empty || value == Some(&Value::Bool(false))) {
            return Err(ValidationError::new("required", format!("{label} is required")));
        }
        let Some(value) = value.filter(|_| !empty) else {
            return Ok(());
        };

        match field {
            FieldDef::Label(_) => Ok(()),
            FieldDef::Text(_) => {
                let Some(text) = value.as_str() else {
                    return Err(type_error(label, "text", value, "must be text"));
                };
                max_length(MAX_TEXT_LENGTH)
                    .with_message(format!(
                        "{label} must be less than {MAX_TEXT_LENGTH} characters"
                    ))
                    .validate(text)
            }
            FieldDef::Number(_) => {
                let number = coerce_number(value)
                    .filter(|n| finite().validate(n).is_ok())
                    .ok_or_else(|| type_error(label, "number", value, "must be a valid number"))?;
                self.policy
                    .band_for(label)
                    .check(label, number, &raw_text(value))
            }
            FieldDef::Boolean(_) => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(type_error(label, "boolean", value, "must be true or false"))
                }
            }
            FieldDef::Enum(p) => {
                if p.options.is_empty() {
                    return Err(ValidationError::new(
                        "no_options",
                        format!("{label} has no available options"),
                    ));
                }
                let choice = one_of(p.options.iter().cloned());
                let message = format!("{label} must be one of: {}", choice.joined());
                match value.as_str() {
                    Some(text) => choice.with_message(message).validate(text),
                    None => Err(ValidationError::new("one_of", message)
                        .with_param("options", choice.joined())),
                }
            }
        }
    }
}

/// Validates one answer with the default number policy.
///
/// # Errors
///
/// See [`FieldValidator::validate`].
pub fn validate_field(field: &FieldDef, value: Option<&Value>) -> Result<(), ValidationError> {
    FieldValidator::default().validate(field, value)
}

fn type_error(label: &str, expected: &'static str, value: &Value, rule: &str) -> ValidationError {
    let mismatch = ValidationError::type_mismatch(expected, json_type(value));
    ValidationError::new("type_mismatch", format!("{label} {rule}"))
        .with_param("expected", expected)
        .with_param("actual", json_type(value))
        .with_nested_error(mismatch)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Numbers pass through; strings are trimmed and parsed, with a blank
/// string counting as zero. Everything else is not a number.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}

/// The answer as the user typed it, for digit counting.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .unwrap_or_else(|| n.as_f64().map_or_else(String::new, |f| f.to_string())),
        other => other.to_string(),
    }
}
