//! Submission commands

use std::path::PathBuf;

use anyhow::Context;
use formsmith_schema::id::TemplateId;
use formsmith_schema::template::Template;
use formsmith_schema::values::FormValues;
use formsmith_store::StoreError;
use serde_json::Value;

use super::find_template;
use crate::context::Store;
use crate::output::OutputFormat;

pub fn handle(
    store: &mut Store,
    template_id: TemplateId,
    values: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let raw = match (values, file) {
        (Some(values), _) => values,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => "{}".to_string(),
    };
    let answers: serde_json::Map<String, Value> =
        serde_json::from_str(&raw).context("values must be a JSON object")?;

    let values = resolve_keys(find_template(store, template_id)?, answers);

    match store.submit_form(template_id, values) {
        Ok(submission) => {
            format.emit(&submission, || submission.id.to_string());
            Ok(())
        }
        Err(StoreError::InvalidSubmission { errors, .. }) => {
            if format.is_json() {
                format.emit(&errors, String::new);
            } else {
                for (_, error) in errors.iter() {
                    eprintln!("{}", error.message());
                }
            }
            anyhow::bail!("submission rejected: {} invalid field(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn list(store: &Store, template: Option<TemplateId>, format: OutputFormat) {
    let submissions = store.submissions(template);
    format.emit(&submissions, || {
        submissions
            .iter()
            .map(|s| {
                format!(
                    "{}\t{}\t{}\t{} answers",
                    s.id,
                    s.template_id,
                    s.submitted_at.to_rfc3339(),
                    s.data.len()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    });
}

/// Keys that exactly match a field label become that field's id; every
/// other key is kept as given.
fn resolve_keys(template: &Template, answers: serde_json::Map<String, Value>) -> FormValues {
    answers
        .into_iter()
        .map(|(key, value)| {
            let key = template
                .fields()
                .find(|f| f.label() == key)
                .map_or(key, |f| f.id().to_string());
            (key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_schema::field::FieldDef;
    use formsmith_schema::section::Section;
    use serde_json::json;

    #[test]
    fn labels_resolve_to_ids() {
        let age = FieldDef::number("Age").required();
        let template: Template = serde_json::from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Survey",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        let template = template.with_section(Section::new("Intake").with_field(age.clone()));

        let mut answers = serde_json::Map::new();
        answers.insert("Age".into(), json!("30"));
        answers.insert("unknown".into(), json!(1));

        let values = resolve_keys(&template, answers);
        assert_eq!(values.for_field(age.id()), Some(&json!("30")));
        assert_eq!(values.get("unknown"), Some(&json!(1)));
    }
}
