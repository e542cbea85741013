//! Fixed-choice validator

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is exactly one of the allowed options.
    ///
    /// Matching is case-sensitive and option order is preserved in the
    /// error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use formsmith_validator::validators::one_of;
    /// use formsmith_validator::foundation::Validate;
    ///
    /// let country = one_of(["USA", "Canada", "UK"]);
    /// assert!(country.validate("UK").is_ok());
    /// assert_eq!(
    ///     country.validate("uk").unwrap_err().message,
    ///     "Value must be one of: USA, Canada, UK"
    /// );
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf { options: Vec<String> } for str;
    rule(self, input) { self.options.iter().any(|option| option == input) }
    error(self, input) {
        ValidationError::new(
            "one_of",
            format!("Value must be one of: {}", self.joined()),
        )
        .with_param("options", self.joined())
        .with_param("actual", input.to_owned())
    }
    new(options: impl IntoIterator<Item = impl Into<String>>) {
        Self { options: options.into_iter().map(Into::into).collect() }
    }
    fn one_of(options: impl IntoIterator<Item = impl Into<String>>);
}

impl OneOf {
    /// The allowed options joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.options.join(", ")
    }

    /// Whether there is nothing to choose from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn exact_match_only() {
        let v = one_of(["A", "B", "C"]);
        assert!(v.validate("A").is_ok());
        assert!(v.validate("a").is_err());
        assert!(v.validate(" A").is_err());
    }

    #[test]
    fn error_lists_options_in_order() {
        let err = one_of(["A", "B", "C"]).validate("D").unwrap_err();
        assert_eq!(err.message, "Value must be one of: A, B, C");
        assert_eq!(err.param("options"), Some("A, B, C"));
    }

    #[test]
    fn empty_options_reject_everything() {
        let v = one_of(Vec::<String>::new());
        assert!(v.is_empty());
        assert!(v.validate("").is_err());
    }
}
