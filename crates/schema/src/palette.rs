//! Field palette shown to template builders.

use serde::Serialize;

use crate::kind::FieldKind;

/// Display information for one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldTypeInfo {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every field kind with its builder-facing name, in palette order.
pub static FIELD_PALETTE: [FieldTypeInfo; 5] = [
    FieldTypeInfo {
        kind: FieldKind::Label,
        name: "Short Answer",
        description: "H1, H2, H3 based styling",
    },
    FieldTypeInfo {
        kind: FieldKind::Text,
        name: "Paragraph",
        description: "Multi-line text input",
    },
    FieldTypeInfo {
        kind: FieldKind::Number,
        name: "Number",
        description: "Numeric input field",
    },
    FieldTypeInfo {
        kind: FieldKind::Boolean,
        name: "Yes/No",
        description: "Checkbox or toggle",
    },
    FieldTypeInfo {
        kind: FieldKind::Enum,
        name: "Dropdown",
        description: "Predefined options",
    },
];

impl FieldKind {
    /// Palette entry for this kind.
    #[must_use]
    pub fn info(self) -> &'static FieldTypeInfo {
        match self {
            Self::Label => &FIELD_PALETTE[0],
            Self::Text => &FIELD_PALETTE[1],
            Self::Number => &FIELD_PALETTE[2],
            Self::Boolean => &FIELD_PALETTE[3],
            Self::Enum => &FIELD_PALETTE[4],
        }
    }
}
