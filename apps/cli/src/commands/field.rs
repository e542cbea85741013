//! Field commands

use formsmith_schema::field::FieldDef;
use formsmith_schema::id::{SectionId, TemplateId};
use formsmith_schema::section::Section;
use formsmith_store::StoreError;

use super::{FieldCommands, find_template, permutation};
use crate::context::Store;
use crate::output::OutputFormat;

pub fn handle(action: FieldCommands, store: &mut Store, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        FieldCommands::Add {
            template,
            section,
            kind,
            label,
            required,
            placeholder,
            options,
            style,
        } => {
            let mut field = match label {
                Some(label) => FieldDef::new(kind, label),
                None => FieldDef::from_palette(kind),
            };
            if required {
                field = field.required();
            }
            if let Some(placeholder) = placeholder {
                field = field.with_placeholder(placeholder);
            }
            if let Some(style) = style {
                field = field.with_label_style(style);
            }
            set_options(&mut field, options);

            let id = store.add_field(template, section, field)?;
            let added = find_section(store, template, section)?.field(id);
            format.emit(&added, || id.to_string());
        }
        FieldCommands::Update {
            template,
            section,
            field,
            label,
            required,
            placeholder,
            options,
        } => {
            let mut updated = find_section(store, template, section)?
                .field(field)
                .cloned()
                .ok_or(StoreError::FieldNotFound {
                    template_id: template,
                    field_id: field,
                })?;
            if let Some(label) = label {
                updated.metadata_mut().label = label;
            }
            if let Some(required) = required {
                updated.set_required(required);
            }
            if let Some(placeholder) = placeholder {
                updated = updated.with_placeholder(placeholder);
            }
            set_options(&mut updated, options);

            store.update_field(template, section, updated)?;
            let stored = find_section(store, template, section)?.field(field);
            format.emit(&stored, || format!("Updated field {field}"));
        }
        FieldCommands::Delete {
            template,
            section,
            field,
        } => {
            store.delete_field(template, section, field)?;
            format.emit(&field, || format!("Deleted field {field}"));
        }
        FieldCommands::Reorder {
            template,
            section,
            fields,
        } => {
            let current = &find_section(store, template, section)?.fields;
            let ordered = permutation(current, &fields, FieldDef::id, "field")?;
            store.reorder_fields(template, section, ordered)?;
            format.emit(&fields, || "Reordered fields".to_string());
        }
    }
    Ok(())
}

fn find_section(store: &Store, template: TemplateId, section: SectionId) -> Result<&Section, StoreError> {
    find_template(store, template)?
        .section(section)
        .ok_or(StoreError::SectionNotFound {
            template_id: template,
            section_id: section,
        })
}

/// Replaces dropdown options when any were given.
fn set_options(field: &mut FieldDef, options: Vec<String>) {
    if options.is_empty() {
        return;
    }
    if let FieldDef::Enum(p) = field {
        p.options = options;
    }
}
