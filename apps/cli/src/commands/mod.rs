//! Subcommand definitions and handlers

use clap::Subcommand;
use formsmith_schema::id::{FieldId, SectionId, TemplateId};
use formsmith_schema::kind::{FieldKind, LabelStyle};
use formsmith_schema::template::Template;
use formsmith_store::StoreError;

use crate::context::{self, Store};

pub mod field;
pub mod palette;
pub mod section;
pub mod submit;
pub mod template;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create an empty template and print its id
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all templates
    List,
    /// Show a template with its sections and fields
    Show {
        #[arg(value_parser = context::template_id)]
        id: TemplateId,
    },
    /// Change the name or description
    Update {
        #[arg(value_parser = context::template_id)]
        id: TemplateId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a template; its submissions are kept
    Delete {
        #[arg(value_parser = context::template_id)]
        id: TemplateId,
    },
    /// Report structural problems; fails when there are any
    Check {
        #[arg(value_parser = context::template_id)]
        id: TemplateId,
    },
}

#[derive(Subcommand)]
pub enum SectionCommands {
    /// Append a section and print its id
    Add {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        title: String,
    },
    /// Change a section title
    Rename {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
        title: String,
    },
    /// Remove a section and its fields
    Delete {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
    },
    /// Put every section of the template in the given order
    Reorder {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id, num_args = 1.., required = true)]
        sections: Vec<SectionId>,
    },
}

#[derive(Subcommand)]
pub enum FieldCommands {
    /// Append a field and print its id
    Add {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
        /// label, text, number, boolean or enum
        #[arg(long)]
        kind: FieldKind,
        /// Defaults to the palette placeholder for the kind
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        required: bool,
        #[arg(long)]
        placeholder: Option<String>,
        /// Dropdown option; repeat for each one
        #[arg(long = "option")]
        options: Vec<String>,
        /// Heading size for label fields: h1, h2 or h3
        #[arg(long)]
        style: Option<LabelStyle>,
    },
    /// Change attributes of a field
    Update {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
        #[arg(value_parser = context::field_id)]
        field: FieldId,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        required: Option<bool>,
        #[arg(long)]
        placeholder: Option<String>,
        /// Replaces all dropdown options when given
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Remove a field
    Delete {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
        #[arg(value_parser = context::field_id)]
        field: FieldId,
    },
    /// Put every field of the section in the given order
    Reorder {
        #[arg(value_parser = context::template_id)]
        template: TemplateId,
        #[arg(value_parser = context::section_id)]
        section: SectionId,
        #[arg(value_parser = context::field_id, num_args = 1.., required = true)]
        fields: Vec<FieldId>,
    },
}

fn find_template(store: &Store, id: TemplateId) -> Result<&Template, StoreError> {
    store.template(id).ok_or(StoreError::TemplateNotFound { id })
}

/// Picks the items named by `ids` out of `items`, in `ids` order. Every
/// item must be named exactly once.
fn permutation<T: Clone, K: PartialEq + std::fmt::Display>(
    items: &[T],
    ids: &[K],
    key: impl Fn(&T) -> K,
    what: &str,
) -> anyhow::Result<Vec<T>> {
    if ids.len() != items.len() {
        anyhow::bail!("expected {} {what} ids, got {}", items.len(), ids.len());
    }
    let mut ordered = Vec::with_capacity(ids.len());
    for (index, id) in ids.iter().enumerate() {
        if ids[..index].contains(id) {
            anyhow::bail!("{what} `{id}` listed twice");
        }
        let item = items
            .iter()
            .find(|&item| key(item) == *id)
            .ok_or_else(|| anyhow::anyhow!("{what} `{id}` not found"))?;
        ordered.push(item.clone());
    }
    Ok(ordered)
}
