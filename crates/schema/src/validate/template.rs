//! Structural validation of a whole template.

use formsmith_validator::prelude::*;

use crate::field::FieldDef;
use crate::template::Template;

/// Longest accepted template name, in characters.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 100;

/// Checks that a template is ready to be filled in.
///
/// Every check runs, so the result lists all problems in a stable order:
/// name, section count, field count, then each section and its fields.
/// An empty list means the template is valid.
#[must_use]
pub fn validate_template(template: &Template) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name = template.name.as_str();
    if let Err(err) = not_blank()
        .with_message("Template name is required")
        .with_code("template_name_required")
        .validate(name)
    {
        errors.push(err);
    }
    if let Err(err) = max_length(MAX_TEMPLATE_NAME_LENGTH)
        .with_message(format!(
            "Template name must be less than {MAX_TEMPLATE_NAME_LENGTH} characters"
        ))
        .with_code("template_name_too_long")
        .validate(name)
    {
        errors.push(err);
    }

    if template.sections.is_empty() {
        errors.push(ValidationError::new(
            "no_sections",
            "Template must have at least one section",
        ));
    }
    if template.field_count() == 0 {
        errors.push(ValidationError::new(
            "no_fields",
            "Template must have at least one field",
        ));
    }

    for (section_index, section) in template.sections.iter().enumerate() {
        if section.title.trim().is_empty() {
            errors.push(
                ValidationError::new(
                    "section_title_required",
                    format!("Section {} must have a title", section_index + 1),
                )
                .with_field(section.id.to_string()),
            );
        }

        for (field_index, field) in section.fields.iter().enumerate() {
            if field.label().trim().is_empty() {
                errors.push(
                    ValidationError::new(
                        "field_label_required",
                        format!(
                            "Field {} in section \"{}\" must have a label",
                            field_index + 1,
                            section.title
                        ),
                    )
                    .with_field(field.id().to_string()),
                );
            }
            if let FieldDef::Enum(p) = field
                && p.options.is_empty()
            {
                errors.push(
                    ValidationError::new(
                        "dropdown_options_required",
                        format!(
                            "Dropdown field \"{}\" must have at least one option",
                            field.label()
                        ),
                    )
                    .with_field(field.id().to_string()),
                );
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(
            template_id = %template.id,
            error_count = errors.len(),
            "template failed structural validation"
        );
    }
    errors
}
