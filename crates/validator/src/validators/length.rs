//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string has at least one non-whitespace character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("not_blank", "String must not be blank") }
    fn not_blank();
}

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}
