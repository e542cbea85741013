//! Identifiers for templates, sections, fields and submissions.
//!
//! Each identifier is a [`domain-key`](https://crates.io/crates/domain-key)
//! `Uuid<D>` wrapper with its own domain marker, so a `SectionId` can never
//! be passed where a `FieldId` is expected. All of them are `Copy`,
//! serialize as UUID strings and support `v4()`, `nil()` and `parse()`.

use domain_key::define_uuid;

pub use domain_key::UuidParseError;
pub use uuid::Uuid;

define_uuid!(pub TemplateIdDomain => TemplateId);
define_uuid!(pub SectionIdDomain => SectionId);
define_uuid!(pub FieldIdDomain => FieldId);
define_uuid!(pub SubmissionIdDomain => SubmissionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_ids_are_unique_and_non_nil() {
        let a = FieldId::v4();
        let b = FieldId::v4();
        assert!(!a.is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn parse_round_trips_through_display() {
        let id = TemplateId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert!(TemplateId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn serializes_as_plain_uuid_string() {
        let raw = Uuid::new_v4();
        let id = SectionId::from(raw);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{raw}\""));
        let back: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), raw);
    }
}
