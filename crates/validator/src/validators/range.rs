//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::out_of_range(self.min, self.max, *input)
    }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates that a value is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use formsmith_validator::validators::greater_than;
    /// use formsmith_validator::foundation::Validate;
    ///
    /// let validator = greater_than(0);
    /// assert!(validator.validate(&1).is_ok());
    /// assert!(validator.validate(&0).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new(
            "greater_than",
            format!("Value must be greater than {}", self.bound),
        )
        .with_param("bound", self.bound.to_string())
        .with_param("actual", input.to_string())
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a float is neither NaN nor infinite.
    pub Finite for f64;
    rule(input) { input.is_finite() }
    error(input) {
        ValidationError::new("not_finite", "Value must be a finite number")
            .with_param("actual", input.to_string())
    }
    fn finite();
}
