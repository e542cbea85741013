//! Phone number validator.
//!
//! Only the digit count matters: every non-digit character (spaces, dashes,
//! parentheses, a leading `+`) is stripped before counting.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a phone number carries between `min` and `max` digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use formsmith_validator::validators::phone_digits;
    /// use formsmith_validator::foundation::Validate;
    ///
    /// let phone = phone_digits(7, 15);
    /// assert!(phone.validate("+1 (415) 555-1234").is_ok());
    /// assert!(phone.validate("555-12").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub PhoneDigits { min: usize, max: usize } for str;
    rule(self, input) {
        let count = digit_count(input);
        count >= self.min && count <= self.max
    }
    error(self, input) {
        ValidationError::new(
            "phone_digits",
            format!("Phone number must have between {}-{} digits", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", digit_count(input).to_string())
    }
    fn phone_digits(min: usize, max: usize);
}

impl Default for PhoneDigits {
    fn default() -> Self {
        Self::new(7, 15)
    }
}

/// Number of ASCII digits in `input`.
#[must_use]
pub fn digit_count(input: &str) -> usize {
    input.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn formatting_is_ignored() {
        let v = PhoneDigits::default();
        assert!(v.validate("4155551234").is_ok());
        assert!(v.validate("+44 20 7123 4567").is_ok());
        assert!(v.validate("(415) 555-1234").is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let v = phone_digits(7, 15);
        assert!(v.validate("1234567").is_ok());
        assert!(v.validate("123456789012345").is_ok());
        assert!(v.validate("123456").is_err());
        assert!(v.validate("1234567890123456").is_err());
    }

    #[test]
    fn error_reports_digit_count() {
        let err = phone_digits(7, 15).validate("+1 23").unwrap_err();
        assert_eq!(err.code, "phone_digits");
        assert_eq!(err.param("actual"), Some("3"));
    }

    #[test]
    fn letters_only_has_zero_digits() {
        assert_eq!(digit_count("call me"), 0);
        assert!(PhoneDigits::default().validate("call me").is_err());
    }
}
