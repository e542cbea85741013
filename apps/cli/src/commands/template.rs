//! Template commands

use std::fmt::Write as _;

use formsmith_schema::template::Template;

use super::{TemplateCommands, find_template};
use crate::context::Store;
use crate::output::OutputFormat;

pub fn handle(action: TemplateCommands, store: &mut Store, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        TemplateCommands::Create { name, description } => {
            let template = store.create_template(name, description)?;
            format.emit(&template, || template.id.to_string());
        }
        TemplateCommands::List => {
            let templates = store.templates();
            format.emit(templates, || {
                templates
                    .iter()
                    .map(|t| {
                        format!(
                            "{}\t{}\t{} sections\t{} fields",
                            t.id,
                            t.name,
                            t.sections.len(),
                            t.field_count()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            });
        }
        TemplateCommands::Show { id } => {
            let template = find_template(store, id)?;
            format.emit(template, || render(template));
        }
        TemplateCommands::Update {
            id,
            name,
            description,
        } => {
            let mut template = find_template(store, id)?.clone();
            if let Some(name) = name {
                template.name = name;
            }
            if let Some(description) = description {
                template.description = Some(description).filter(|d| !d.is_empty());
            }
            store.update_template(template)?;
            let updated = find_template(store, id)?;
            format.emit(updated, || format!("Updated template {id}"));
        }
        TemplateCommands::Delete { id } => {
            let removed = store.delete_template(id)?;
            format.emit(&removed, || format!("Deleted template {id}"));
        }
        TemplateCommands::Check { id } => {
            let problems = store.check_template(id)?;
            let messages: Vec<&str> = problems.iter().map(|p| p.message()).collect();
            format.emit(&messages, || {
                if messages.is_empty() {
                    "Template is valid".to_string()
                } else {
                    messages.join("\n")
                }
            });
            if !messages.is_empty() {
                anyhow::bail!("template has {} problem(s)", messages.len());
            }
        }
    }
    Ok(())
}

/// Indented outline of sections and fields in display order.
fn render(template: &Template) -> String {
    let mut out = format!("{} ({})", template.name, template.id);
    if let Some(description) = &template.description {
        let _ = write!(out, "\n  {description}");
    }

    let mut sections: Vec<_> = template.sections.iter().collect();
    sections.sort_by_key(|s| s.order);
    for section in sections {
        let _ = write!(out, "\n  [{}] {} ({})", section.order, section.title, section.id);

        let mut fields: Vec<_> = section.fields.iter().collect();
        fields.sort_by_key(|f| f.order());
        for field in fields {
            let _ = write!(
                out,
                "\n    [{}] {} \"{}\" ({}){}",
                field.order(),
                field.kind(),
                field.label(),
                field.id(),
                if field.is_required() { " required" } else { "" }
            );
            if let Some(options) = field.options() {
                let _ = write!(out, " options: {}", options.join(", "));
            }
        }
    }
    out
}
