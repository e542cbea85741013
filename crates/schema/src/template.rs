use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::FieldDef;
use crate::id::{FieldId, SectionId, TemplateId};
use crate::section::Section;

/// A named form definition: ordered sections of ordered fields.
///
/// Timestamps are set by the caller so the owner of the clock decides what
/// "now" means; a `Template` never reads the system time itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// A template with a fresh id, no sections and both timestamps at `now`.
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: TemplateId::v4(),
            name: name.into(),
            description,
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a section, builder style, placed at the end.
    #[must_use]
    pub fn with_section(mut self, mut section: Section) -> Self {
        section.order = self.sections.len();
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Mutable lookup of a section.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SectionNotFound`] if no section has that id.
    pub fn section_mut(&mut self, id: SectionId) -> Result<&mut Section, SchemaError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SchemaError::SectionNotFound { id })
    }

    /// Looks up a field in any section.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldDef> {
        self.fields().find(|f| f.id() == id)
    }

    /// Every field of every section, in section then field order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Total number of fields across all sections.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Appends an empty section with `order` equal to the current section
    /// count. Returns the new id.
    pub fn push_section(&mut self, title: impl Into<String>) -> SectionId {
        let mut section = Section::new(title);
        section.order = self.sections.len();
        let id = section.id;
        self.sections.push(section);
        id
    }

    /// Replaces the section with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SectionNotFound`] if no section has that id.
    pub fn replace_section(&mut self, section: Section) -> Result<(), SchemaError> {
        let slot = self.section_mut(section.id)?;
        *slot = section;
        Ok(())
    }

    /// Removes a section. Survivors keep their `order` values.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SectionNotFound`] if no section has that id.
    pub fn remove_section(&mut self, id: SectionId) -> Result<Section, SchemaError> {
        let index = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(SchemaError::SectionNotFound { id })?;
        Ok(self.sections.remove(index))
    }

    /// Replaces the section list and renumbers `order` to list position.
    pub fn reorder_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }

    /// Moves `updated_at` forward to `now`, never backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now).max(self.created_at);
    }
}
