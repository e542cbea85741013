//! Section commands

use formsmith_store::StoreError;

use super::{SectionCommands, find_template, permutation};
use crate::context::Store;
use crate::output::OutputFormat;

pub fn handle(action: SectionCommands, store: &mut Store, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        SectionCommands::Add { template, title } => {
            let id = store.add_section(template, title)?;
            let section = find_template(store, template)?.section(id);
            format.emit(&section, || id.to_string());
        }
        SectionCommands::Rename {
            template,
            section,
            title,
        } => {
            let mut updated = find_template(store, template)?
                .section(section)
                .cloned()
                .ok_or(StoreError::SectionNotFound {
                    template_id: template,
                    section_id: section,
                })?;
            updated.title = title;
            store.update_section(template, updated)?;
            format.emit(&section, || format!("Renamed section {section}"));
        }
        SectionCommands::Delete { template, section } => {
            store.delete_section(template, section)?;
            format.emit(&section, || format!("Deleted section {section}"));
        }
        SectionCommands::Reorder { template, sections } => {
            let current = &find_template(store, template)?.sections;
            let ordered = permutation(current, &sections, |s| s.id, "section")?;
            store.reorder_sections(template, ordered)?;
            format.emit(&sections, || "Reordered sections".to_string());
        }
    }
    Ok(())
}
