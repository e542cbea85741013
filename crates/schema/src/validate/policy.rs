//! Range policy for number fields.

use formsmith_validator::prelude::*;
use serde::{Deserialize, Serialize};

/// How number fields are range-checked once they parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Pick a band from keywords in the field label.
    #[default]
    Heuristic,
    /// One wide band for every number field.
    Flat,
}

/// The range a number field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberBand {
    /// 7 to 15 digits once formatting is stripped.
    PhoneDigits,
    /// 0 to 150.
    Age,
    /// 0 to 100.
    Years,
    /// Strictly positive.
    PositiveId,
    /// -1,000,000 to 1,000,000.
    General,
    /// -999,999,999 to 999,999,999.
    Flat,
}

const PHONE_KEYWORDS: [&str; 3] = ["phone", "contact", "mobile"];
const YEAR_KEYWORDS: [&str; 2] = ["year", "experience"];
const ID_KEYWORDS: [&str; 2] = ["id", "employee"];

impl NumberPolicy {
    /// Chooses the band for a field label. Keyword matching is a
    /// case-insensitive substring test and the first match wins.
    #[must_use]
    pub fn band_for(self, label: &str) -> NumberBand {
        if self == Self::Flat {
            return NumberBand::Flat;
        }
        let label = label.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| label.contains(w));

        if has_any(&PHONE_KEYWORDS) {
            NumberBand::PhoneDigits
        } else if label.contains("age") {
            NumberBand::Age
        } else if has_any(&YEAR_KEYWORDS) {
            NumberBand::Years
        } else if has_any(&ID_KEYWORDS) {
            NumberBand::PositiveId
        } else {
            NumberBand::General
        }
    }
}

impl NumberBand {
    /// Checks a parsed number. `digits` is the raw input text used for the
    /// phone band, where only the digit count matters.
    ///
    /// # Errors
    ///
    /// Returns the band's message, prefixed with `label`, when out of range.
    pub fn check(self, label: &str, number: f64, digits: &str) -> Result<(), ValidationError> {
        match self {
            Self::PhoneDigits => PhoneDigits::default()
                .with_message(format!("{label} must be between 7-15 digits"))
                .validate(digits),
            Self::Age => in_range(0.0, 150.0)
                .with_message(format!("{label} must be between 0 and 150"))
                .validate(&number),
            Self::Years => in_range(0.0, 100.0)
                .with_message(format!("{label} must be between 0 and 100"))
                .validate(&number),
            Self::PositiveId => greater_than(0.0)
                .with_message(format!("{label} must be a positive number"))
                .validate(&number),
            Self::General => in_range(-1_000_000.0, 1_000_000.0)
                .with_message(format!(
                    "{label} must be between -1,000,000 and 1,000,000"
                ))
                .validate(&number),
            Self::Flat => in_range(-999_999_999.0, 999_999_999.0)
                .with_message(format!(
                    "{label} must be between -999,999,999 and 999,999,999"
                ))
                .validate(&number),
        }
    }
}
