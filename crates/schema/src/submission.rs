use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{SubmissionId, TemplateId};
use crate::values::FormValues;

/// One filled-in instance of a template.
///
/// Submissions reference their template by id only; deleting the template
/// leaves them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: SubmissionId,
    pub template_id: TemplateId,
    #[serde(default)]
    pub data: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl FormSubmission {
    /// A submission with a fresh id.
    #[must_use]
    pub fn new(template_id: TemplateId, data: FormValues, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: SubmissionId::v4(),
            template_id,
            data,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape() {
        let template_id = TemplateId::v4();
        let mut data = FormValues::new();
        data.set("f", json!(true));
        let sub = FormSubmission::new(template_id, data, Utc::now());

        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(value["templateId"], template_id.to_string());
        assert_eq!(value["data"], json!({ "f": true }));
        assert!(value["submittedAt"].is_string());

        let back: FormSubmission = serde_json::from_value(value).unwrap();
        assert_eq!(back, sub);
    }
}
