use formsmith_schema::error::SchemaError;
use formsmith_schema::field::FieldDef;
use formsmith_schema::id::{FieldId, SectionId, TemplateId};
use formsmith_schema::section::Section;
use formsmith_schema::submission::FormSubmission;
use formsmith_schema::template::Template;
use formsmith_schema::validate::{FieldValidator, validate_template};
use formsmith_schema::values::FormValues;
use formsmith_storage::KeyValueStore;
use formsmith_validator::foundation::ValidationError;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Owns every template and submission and keeps them persisted.
///
/// Each mutation works on a copy of the affected template, stamps
/// `updated_at`, writes the whole list back to storage and only then swaps
/// the copy in. A failed lookup or a failed write leaves the store exactly
/// as it was.
///
/// Mutations take `&mut self`; wrap the store in a `parking_lot::Mutex` to
/// share it.
#[derive(Debug)]
pub struct TemplateStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: StoreConfig,
    validator: FieldValidator,
    templates: Vec<Template>,
    submissions: Vec<FormSubmission>,
    active: Option<TemplateId>,
}

impl<S: KeyValueStore> TemplateStore<S> {
    /// Opens a store on `storage` using wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`TemplateStore::with_clock`].
    pub fn open(storage: S, config: StoreConfig) -> Result<Self, StoreError> {
        Self::with_clock(storage, SystemClock, config)
    }
}

impl<S: KeyValueStore, C: Clock> TemplateStore<S, C> {
    /// Opens a store and loads both lists from `storage`. Missing keys load
    /// as empty lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, storage cannot be read, or
    /// a stored list is not valid JSON of the expected shape.
    pub fn with_clock(storage: S, clock: C, config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let templates: Vec<Template> = load_list(&storage, &config.templates_key)?;
        let submissions: Vec<FormSubmission> = load_list(&storage, &config.submissions_key)?;
        tracing::debug!(
            templates = templates.len(),
            submissions = submissions.len(),
            "opened template store"
        );
        Ok(Self {
            storage,
            clock,
            validator: FieldValidator::new(config.number_policy),
            config,
            templates,
            submissions,
            active: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// All templates in creation order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    #[must_use]
    pub fn template(&self, id: TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The template currently selected for editing, if any. Always reflects
    /// the latest stored version.
    #[must_use]
    pub fn active_template(&self) -> Option<&Template> {
        self.active.and_then(|id| self.template(id))
    }

    /// Selects the template being edited, or clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown id.
    pub fn set_active_template(&mut self, id: Option<TemplateId>) -> Result<(), StoreError> {
        if let Some(id) = id {
            self.position(id)?;
        }
        self.active = id;
        Ok(())
    }

    /// Creates an empty template with both timestamps at "now".
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LimitExceeded`] when the cap is already reached,
    /// or a storage error if the list cannot be written.
    pub fn create_template(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Template, StoreError> {
        let max = self.config.max_templates;
        if self.templates.len() >= max {
            tracing::warn!(max, "template limit reached");
            return Err(StoreError::LimitExceeded { max });
        }

        let template = Template::new(name, description, self.clock.now());
        self.templates.push(template.clone());
        if let Err(e) = self.persist_templates() {
            self.templates.pop();
            return Err(e);
        }
        tracing::info!(template_id = %template.id, name = %template.name, "created template");
        Ok(template)
    }

    /// Replaces a template by id. The stored `created_at` is kept and
    /// `updated_at` moves forward.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown id.
    pub fn update_template(&mut self, template: Template) -> Result<(), StoreError> {
        let id = template.id;
        self.mutate(id, "update_template", move |stored| {
            let created_at = stored.created_at;
            let updated_at = stored.updated_at;
            *stored = Template {
                created_at,
                updated_at,
                ..template
            };
            Ok(())
        })
    }

    /// Removes a template. Its submissions stay; the active selection is
    /// cleared if it pointed here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown id.
    pub fn delete_template(&mut self, id: TemplateId) -> Result<Template, StoreError> {
        let index = self.position(id)?;
        let removed = self.templates.remove(index);
        if let Err(e) = self.persist_templates() {
            self.templates.insert(index, removed);
            return Err(e);
        }
        if self.active == Some(id) {
            self.active = None;
        }
        tracing::info!(template_id = %id, "deleted template");
        Ok(removed)
    }

    /// Appends an empty section. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown template.
    pub fn add_section(
        &mut self,
        template_id: TemplateId,
        title: impl Into<String>,
    ) -> Result<SectionId, StoreError> {
        let title = title.into();
        self.mutate(template_id, "add_section", |t| Ok(t.push_section(title)))
    }

    /// Replaces a section by id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template or section.
    pub fn update_section(&mut self, template_id: TemplateId, section: Section) -> Result<(), StoreError> {
        self.mutate(template_id, "update_section", |t| t.replace_section(section))
    }

    /// Removes a section. Remaining sections keep their `order`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template or section.
    pub fn delete_section(&mut self, template_id: TemplateId, section_id: SectionId) -> Result<(), StoreError> {
        self.mutate(template_id, "delete_section", |t| {
            t.remove_section(section_id).map(drop)
        })
    }

    /// Replaces the section list and renumbers `order` to list position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown template.
    pub fn reorder_sections(
        &mut self,
        template_id: TemplateId,
        sections: Vec<Section>,
    ) -> Result<(), StoreError> {
        self.mutate(template_id, "reorder_sections", |t| {
            t.reorder_sections(sections);
            Ok(())
        })
    }

    /// Appends a field with a fresh id and `order` equal to the section's
    /// field count. The id and order on `field` are ignored. Returns the
    /// new id.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template or section.
    pub fn add_field(
        &mut self,
        template_id: TemplateId,
        section_id: SectionId,
        field: FieldDef,
    ) -> Result<FieldId, StoreError> {
        self.mutate(template_id, "add_field", |t| {
            Ok(t.section_mut(section_id)?.push_field(field))
        })
    }

    /// Replaces a field by id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template, section or field.
    pub fn update_field(
        &mut self,
        template_id: TemplateId,
        section_id: SectionId,
        field: FieldDef,
    ) -> Result<(), StoreError> {
        self.mutate(template_id, "update_field", |t| {
            t.section_mut(section_id)?.replace_field(field)
        })
    }

    /// Removes a field. Remaining fields keep their `order`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template, section or field.
    pub fn delete_field(
        &mut self,
        template_id: TemplateId,
        section_id: SectionId,
        field_id: FieldId,
    ) -> Result<(), StoreError> {
        self.mutate(template_id, "delete_field", |t| {
            t.section_mut(section_id)?.remove_field(field_id).map(drop)
        })
    }

    /// Replaces a section's field list and renumbers `order` to list
    /// position.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown template or section.
    pub fn reorder_fields(
        &mut self,
        template_id: TemplateId,
        section_id: SectionId,
        fields: Vec<FieldDef>,
    ) -> Result<(), StoreError> {
        self.mutate(template_id, "reorder_fields", |t| {
            t.section_mut(section_id)?.reorder_fields(fields);
            Ok(())
        })
    }

    /// Structural problems of a stored template; empty when it is ready to
    /// be filled in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateNotFound`] for an unknown id.
    pub fn check_template(&self, id: TemplateId) -> Result<Vec<ValidationError>, StoreError> {
        let index = self.position(id)?;
        Ok(validate_template(&self.templates[index]))
    }

    /// Validates `values` against every field of the template and records
    /// them as a new submission.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSubmission`] with the per-field errors
    /// when any field fails, [`StoreError::TemplateNotFound`] for an unknown
    /// template, or a storage error if the list cannot be written.
    pub fn submit_form(
        &mut self,
        template_id: TemplateId,
        values: FormValues,
    ) -> Result<FormSubmission, StoreError> {
        let index = self.position(template_id)?;
        let errors = self
            .validator
            .validate_template_values(&self.templates[index], &values);
        if !errors.is_empty() {
            tracing::warn!(
                template_id = %template_id,
                error_count = errors.len(),
                "rejected invalid submission"
            );
            return Err(StoreError::InvalidSubmission {
                template_id,
                errors,
            });
        }

        let submission = FormSubmission::new(template_id, values, self.clock.now());
        self.submissions.push(submission.clone());
        if let Err(e) = self.persist_submissions() {
            self.submissions.pop();
            return Err(e);
        }
        tracing::info!(
            template_id = %template_id,
            submission_id = %submission.id,
            "recorded submission"
        );
        Ok(submission)
    }

    /// All submissions in arrival order, optionally only those for one
    /// template.
    #[must_use]
    pub fn submissions(&self, template_id: Option<TemplateId>) -> Vec<&FormSubmission> {
        self.submissions
            .iter()
            .filter(|s| template_id.is_none_or(|id| s.template_id == id))
            .collect()
    }

    fn position(&self, id: TemplateId) -> Result<usize, StoreError> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TemplateNotFound { id })
    }

    /// Applies `op` to a copy of the template, stamps it, persists the list
    /// and swaps the copy in.
    fn mutate<T>(
        &mut self,
        id: TemplateId,
        op: &'static str,
        f: impl FnOnce(&mut Template) -> Result<T, SchemaError>,
    ) -> Result<T, StoreError> {
        let index = self.position(id).inspect_err(|_| {
            tracing::warn!(template_id = %id, op, "template not found");
        })?;

        let mut draft = self.templates[index].clone();
        let out = f(&mut draft).map_err(|e| {
            tracing::warn!(template_id = %id, op, error = %e, "rejected mutation");
            StoreError::from_schema(id, e)
        })?;
        draft.touch(self.clock.now());

        let previous = std::mem::replace(&mut self.templates[index], draft);
        if let Err(e) = self.persist_templates() {
            self.templates[index] = previous;
            return Err(e);
        }
        tracing::debug!(
            template_id = %id,
            op,
            updated_at = %self.templates[index].updated_at,
            "template updated"
        );
        Ok(out)
    }

    fn persist_templates(&self) -> Result<(), StoreError> {
        save_list(&self.storage, &self.config.templates_key, &self.templates)
    }

    fn persist_submissions(&self) -> Result<(), StoreError> {
        save_list(&self.storage, &self.config.submissions_key, &self.submissions)
    }
}

fn load_list<T: DeserializeOwned>(storage: &impl KeyValueStore, key: &str) -> Result<Vec<T>, StoreError> {
    match storage.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Serialization {
            key: key.to_owned(),
            source,
        }),
    }
}

fn save_list<T: Serialize>(
    storage: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(items).map_err(|source| StoreError::Serialization {
        key: key.to_owned(),
        source,
    })?;
    storage.set(key, &raw)?;
    Ok(())
}
