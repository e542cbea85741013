use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The kind of a form field, determining its input widget and value rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Display-only heading, never carries a value.
    Label,
    /// Free text.
    Text,
    /// Numeric input, range-checked by the active number policy.
    Number,
    /// Yes/No toggle.
    Boolean,
    /// Dropdown over a fixed list of options.
    Enum,
}

impl FieldKind {
    /// All kinds, in palette order.
    pub const ALL: [Self; 5] = [
        Self::Label,
        Self::Text,
        Self::Number,
        Self::Boolean,
        Self::Enum,
    ];

    /// The wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
        }
    }

    /// Whether fields of this kind collect a value from the user.
    #[must_use]
    pub const fn has_value(self) -> bool {
        !matches!(self, Self::Label)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownFieldType { name: s.to_owned() })
    }
}

/// Heading size of a label field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    H1,
    #[default]
    H2,
    H3,
}

impl LabelStyle {
    /// The wire name of this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }

    /// Human-readable description for style pickers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::H1 => "H1 - Large Header",
            Self::H2 => "H2 - Medium Header",
            Self::H3 => "H3 - Small Header",
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelStyle {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            other => Err(SchemaError::UnknownLabelStyle {
                name: other.to_owned(),
            }),
        }
    }
}
