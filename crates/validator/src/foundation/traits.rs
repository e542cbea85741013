//! Core traits for the validation system

use crate::combinators::{And, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a validator is only ever applied to the
/// kind of value it understands. `Input` may be unsized (`str`, `[T]`).
///
/// # Examples
///
/// ```rust
/// use formsmith_validator::foundation::{Validate, ValidationError};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = f64;
///
///     fn validate(&self, input: &f64) -> Result<(), ValidationError> {
///         if *input == 0.0 {
///             Err(ValidationError::new("non_zero", "must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&1.0).is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND, short-circuiting on the
    /// first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the error message produced on failure.
    ///
    /// The original error is kept as a nested error.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Replaces the error code produced on failure, keeping the message.
    fn with_code(self, code: impl Into<String>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }
}

impl<T: Validate> ValidateExt for T {}
