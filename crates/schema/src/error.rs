use crate::id::{FieldId, SectionId};

/// Error type for schema operations.
///
/// Covers unknown wire names and ids that do not resolve inside a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A field type name outside the closed set of kinds.
    #[error("Unknown field type: {name}")]
    UnknownFieldType { name: String },

    /// A label style name other than `h1`, `h2` or `h3`.
    #[error("unknown label style `{name}`")]
    UnknownLabelStyle { name: String },

    /// No section with the given id in the template.
    #[error("section not found: `{id}`")]
    SectionNotFound { id: SectionId },

    /// No field with the given id in the section.
    #[error("field not found: `{id}`")]
    FieldNotFound { id: FieldId },
}

impl SchemaError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnknownFieldType { .. } | Self::UnknownLabelStyle { .. } => "format",
            Self::SectionNotFound { .. } | Self::FieldNotFound { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownFieldType { .. } => "SCHEMA_UNKNOWN_FIELD_TYPE",
            Self::UnknownLabelStyle { .. } => "SCHEMA_UNKNOWN_LABEL_STYLE",
            Self::SectionNotFound { .. } => "SCHEMA_SECTION_NOT_FOUND",
            Self::FieldNotFound { .. } => "SCHEMA_FIELD_NOT_FOUND",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Schema errors are deterministic, so this is always `false`.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}
