use formsmith_schema::error::SchemaError;
use formsmith_schema::id::{FieldId, SectionId, TemplateId};
use formsmith_schema::validate::FormErrors;
use formsmith_storage::StorageError;

/// Error type for template store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Creating another template would exceed the configured cap.
    #[error("Maximum {max} templates allowed")]
    LimitExceeded { max: usize },

    /// No template with the given id.
    #[error("template not found: `{id}`")]
    TemplateNotFound { id: TemplateId },

    /// The template has no section with the given id.
    #[error("section `{section_id}` not found in template `{template_id}`")]
    SectionNotFound {
        template_id: TemplateId,
        section_id: SectionId,
    },

    /// The section has no field with the given id.
    #[error("field `{field_id}` not found in template `{template_id}`")]
    FieldNotFound {
        template_id: TemplateId,
        field_id: FieldId,
    },

    /// Submitted values failed field validation.
    #[error("submission for template `{template_id}` is invalid: {errors}")]
    InvalidSubmission {
        template_id: TemplateId,
        errors: FormErrors,
    },

    /// A schema rule was violated.
    #[error(transparent)]
    Schema(SchemaError),

    /// A configuration layer could not be read or parsed.
    #[error("failed to load store config: {0}")]
    Config(#[source] Box<figment::Error>),

    /// Merged configuration values are unusable.
    #[error("invalid store config: {reason}")]
    InvalidConfig { reason: String },

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A stored list could not be encoded or decoded.
    #[error("failed to (de)serialize `{key}`: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Attaches the template id to a schema lookup failure.
    #[must_use]
    pub fn from_schema(template_id: TemplateId, err: SchemaError) -> Self {
        match err {
            SchemaError::SectionNotFound { id } => Self::SectionNotFound {
                template_id,
                section_id: id,
            },
            SchemaError::FieldNotFound { id } => Self::FieldNotFound {
                template_id,
                field_id: id,
            },
            other => Self::Schema(other),
        }
    }

    /// Whether this is one of the "id does not resolve" errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TemplateNotFound { .. } | Self::SectionNotFound { .. } | Self::FieldNotFound { .. }
        )
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => "limit",
            Self::TemplateNotFound { .. }
            | Self::SectionNotFound { .. }
            | Self::FieldNotFound { .. } => "lookup",
            Self::InvalidSubmission { .. } => "validation",
            Self::Schema(_) => "schema",
            Self::Config(_) | Self::InvalidConfig { .. } => "config",
            Self::Storage(_) => "storage",
            Self::Serialization { .. } => "serialization",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => "STORE_LIMIT_EXCEEDED",
            Self::TemplateNotFound { .. } => "STORE_TEMPLATE_NOT_FOUND",
            Self::SectionNotFound { .. } => "STORE_SECTION_NOT_FOUND",
            Self::FieldNotFound { .. } => "STORE_FIELD_NOT_FOUND",
            Self::InvalidSubmission { .. } => "STORE_INVALID_SUBMISSION",
            Self::Schema(e) => e.code(),
            Self::Config(_) => "STORE_CONFIG",
            Self::InvalidConfig { .. } => "STORE_INVALID_CONFIG",
            Self::Storage(e) => e.code(),
            Self::Serialization { .. } => "STORE_SERIALIZATION",
        }
    }

    /// Only backend I/O failures are worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_message() {
        let err = StoreError::LimitExceeded { max: 5 };
        assert_eq!(err.to_string(), "Maximum 5 templates allowed");
        assert_eq!(err.code(), "STORE_LIMIT_EXCEEDED");
        assert_eq!(err.category(), "limit");
        assert!(!err.is_retryable());
    }

    #[test]
    fn schema_lookups_gain_template_context() {
        let template_id = TemplateId::v4();
        let section_id = SectionId::v4();
        let err = StoreError::from_schema(template_id, SchemaError::SectionNotFound { id: section_id });
        assert!(matches!(
            err,
            StoreError::SectionNotFound { template_id: t, section_id: s }
                if t == template_id && s == section_id
        ));
        assert!(err.is_not_found());

        let err = StoreError::from_schema(
            template_id,
            SchemaError::UnknownFieldType { name: "x".into() },
        );
        assert_eq!(err.code(), "SCHEMA_UNKNOWN_FIELD_TYPE");
        assert!(!err.is_not_found());
    }
}
