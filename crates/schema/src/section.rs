use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::field::FieldDef;
use crate::id::{FieldId, SectionId};

/// An ordered group of fields under a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Zero-based position within the owning template.
    #[serde(default)]
    pub order: usize,
}

impl Section {
    /// An empty section with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SectionId::v4(),
            title: title.into(),
            fields: Vec::new(),
            order: 0,
        }
    }

    /// Adds a field, builder style. The field keeps its id and is placed
    /// at the end.
    #[must_use]
    pub fn with_field(mut self, mut field: FieldDef) -> Self {
        field.set_order(self.fields.len());
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Appends `field` with a fresh id and `order` equal to the current
    /// field count. Returns the new id.
    pub fn push_field(&mut self, mut field: FieldDef) -> FieldId {
        let id = FieldId::v4();
        let meta = field.metadata_mut();
        meta.id = id;
        meta.order = self.fields.len();
        self.fields.push(field);
        id
    }

    /// Replaces the field with the same id, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that id.
    pub fn replace_field(&mut self, field: FieldDef) -> Result<(), SchemaError> {
        let id = field.id();
        let slot = self
            .fields
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or(SchemaError::FieldNotFound { id })?;
        *slot = field;
        Ok(())
    }

    /// Removes a field. Survivors keep their `order` values.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that id.
    pub fn remove_field(&mut self, id: FieldId) -> Result<FieldDef, SchemaError> {
        let index = self
            .fields
            .iter()
            .position(|f| f.id() == id)
            .ok_or(SchemaError::FieldNotFound { id })?;
        Ok(self.fields.remove(index))
    }

    /// Replaces the field list and renumbers `order` to list position.
    pub fn reorder_fields(&mut self, fields: Vec<FieldDef>) {
        self.fields = fields;
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.set_order(index);
        }
    }

    /// Fields that collect a value, in declaration order.
    pub fn input_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.kind().has_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(section: &Section) -> Vec<usize> {
        section.fields.iter().map(FieldDef::order).collect()
    }

    #[test]
    fn push_assigns_fresh_id_and_position() {
        let mut section = Section::new("Intake");
        let draft = FieldDef::text("Name");
        let draft_id = draft.id();
        let first = section.push_field(draft);
        let second = section.push_field(FieldDef::number("Age"));

        assert_ne!(first, draft_id);
        assert_ne!(first, second);
        assert_eq!(orders(&section), vec![0, 1]);
        assert_eq!(section.field(second).unwrap().label(), "Age");
    }

    #[test]
    fn remove_leaves_gaps() {
        let mut section = Section::new("S");
        let a = section.push_field(FieldDef::text("A"));
        section.push_field(FieldDef::text("B"));
        section.push_field(FieldDef::text("C"));

        section.remove_field(a).unwrap();
        assert_eq!(orders(&section), vec![1, 2]);
        assert!(matches!(
            section.remove_field(a),
            Err(SchemaError::FieldNotFound { id }) if id == a
        ));
    }

    #[test]
    fn reorder_renumbers() {
        let mut section = Section::new("S");
        section.push_field(FieldDef::text("A"));
        section.push_field(FieldDef::text("B"));

        let mut reversed = section.fields.clone();
        reversed.reverse();
        section.reorder_fields(reversed);

        assert_eq!(section.fields[0].label(), "B");
        assert_eq!(orders(&section), vec![0, 1]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut section = Section::new("S");
        section.push_field(FieldDef::text("A"));
        let b = section.push_field(FieldDef::text("B"));

        let mut edited = section.field(b).unwrap().clone().required();
        edited.metadata_mut().label = "Bee".into();
        section.replace_field(edited).unwrap();

        assert_eq!(section.fields[1].label(), "Bee");
        assert!(section.fields[1].is_required());
        assert!(section.replace_field(FieldDef::text("ghost")).is_err());
    }

    #[test]
    fn input_fields_skip_labels() {
        let section = Section::new("S")
            .with_field(FieldDef::label_field("Heading"))
            .with_field(FieldDef::text("Name"));
        let labels: Vec<&str> = section.input_fields().map(FieldDef::label).collect();
        assert_eq!(labels, vec!["Name"]);
        assert_eq!(section.fields[1].order(), 1);
    }
}
