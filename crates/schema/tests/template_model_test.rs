//! Ordering and serialization behavior of the template model.

use chrono::Utc;
use formsmith_schema::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn delete_then_reorder_sections() {
    let mut template = Template::new("T", None, Utc::now());
    let a = template.push_section("A");
    let b = template.push_section("B");

    template.remove_section(a).unwrap();
    assert_eq!(template.section(b).unwrap().order, 1);

    let only_b = vec![template.section(b).unwrap().clone()];
    template.reorder_sections(only_b);
    assert_eq!(template.section(b).unwrap().order, 0);
}

#[test]
fn field_lookup_through_template() {
    let mut template = Template::new("T", None, Utc::now());
    let section = template.push_section("S");
    let field = template
        .section_mut(section)
        .unwrap()
        .push_field(FieldDef::dropdown("Color", ["Red"]));

    assert_eq!(template.field(field).unwrap().kind(), FieldKind::Enum);
    assert_eq!(template.field_count(), 1);
}

#[test]
fn stored_json_shape() {
    let template = Template::new("Survey", Some("Yearly".into()), Utc::now())
        .with_section(Section::new("Intake").with_field(FieldDef::number("Age").required()));
    let value = serde_json::to_value(&template).unwrap();

    assert_eq!(value["name"], "Survey");
    assert_eq!(value["description"], "Yearly");
    let field = &value["sections"][0]["fields"][0];
    assert_eq!(field["type"], "number");
    assert_eq!(field["required"], true);
    assert_eq!(field["placeholder"], "Enter a number...");
    assert_eq!(value["sections"][0]["order"], 0);

    let back: Template = serde_json::from_value(value).unwrap();
    assert_eq!(back, template);
}

#[test]
fn loads_templates_without_optional_keys() {
    let template: Template = serde_json::from_value(json!({
        "id": TemplateId::v4().to_string(),
        "name": "Bare",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert!(template.sections.is_empty());
    assert!(template.description.is_none());
}

proptest! {
    #[test]
    fn reorder_is_idempotent(count in 1usize..12, seed in any::<u64>()) {
        let mut section = Section::new("S");
        for i in 0..count {
            section.push_field(FieldDef::text(format!("F{i}")));
        }

        let mut shuffled = section.fields.clone();
        let len = shuffled.len();
        shuffled.rotate_left(usize::try_from(seed % len as u64).unwrap());
        section.reorder_fields(shuffled);

        let once = section.fields.clone();
        section.reorder_fields(once.clone());
        prop_assert_eq!(&section.fields, &once);
        for (index, field) in section.fields.iter().enumerate() {
            prop_assert_eq!(field.order(), index);
        }
    }
}
