//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Field validators use this to turn a generic primitive failure into the
/// label-specific sentence shown to the user.
///
/// # Examples
///
/// ```rust
/// use formsmith_validator::prelude::*;
///
/// let validator = max_length(5000).with_message("Bio must be less than 5000 characters");
/// let err = validator.validate(&"x".repeat(5001)).unwrap_err();
/// assert_eq!(err.message, "Bio must be less than 5000 characters");
/// assert_eq!(err.code, "max_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a combinator that only overrides the error code, keeping the original message.
    pub fn code_only(inner: V, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: String::new(),
            code: Some(code.into()),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            let message = if self.message.is_empty() {
                original.message.clone()
            } else {
                Cow::Owned(self.message.clone())
            };

            let mut replaced = ValidationError::new(code, message);
            replaced.params = original.params.clone();
            replaced.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
