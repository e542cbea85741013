//! End-to-end validation of answers against templates.

use chrono::Utc;
use formsmith_schema::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn survey() -> (Template, FieldId) {
    let age = FieldDef::number("Age").required();
    let id = age.id();
    let template = Template::new("Survey", None, Utc::now())
        .with_section(Section::new("Intake").with_field(age));
    (template, id)
}

#[test]
fn survey_intake_age_scenario() {
    let (template, age) = survey();

    let errors = validate_template_values(&template, &FormValues::new());
    assert_eq!(errors.message(age), Some("Age is required"));

    let errors = validate_template_values(&template, &FormValues::new().with_field(age, json!("200")));
    assert_eq!(errors.message(age), Some("Age must be between 0 and 150"));

    let errors = validate_template_values(&template, &FormValues::new().with_field(age, json!("30")));
    assert!(errors.is_empty());
}

#[rstest]
#[case(FieldDef::text("Name"))]
#[case(FieldDef::number("Age"))]
#[case(FieldDef::boolean("Agree"))]
#[case(FieldDef::dropdown("Size", ["S", "M"]))]
fn required_and_empty_mentions_label(#[case] field: FieldDef) {
    let field = field.required();
    for value in [None, Some(json!("")), Some(json!(null)), Some(json!(false))] {
        let err = validate_field(&field, value.as_ref()).unwrap_err();
        assert_eq!(err.message, format!("{} is required", field.label()));
    }
}

#[rstest]
#[case("Years of experience", json!(101), Some("Years of experience must be between 0 and 100"))]
#[case("Years of experience", json!(5), None)]
#[case("Employee ID", json!(-3), Some("Employee ID must be a positive number"))]
#[case("Employee ID", json!("17"), None)]
#[case("Contact number", json!("555123"), Some("Contact number must be between 7-15 digits"))]
#[case("Score", json!(-1_000_001), Some("Score must be between -1,000,000 and 1,000,000"))]
#[case("Score", json!("abc"), Some("Score must be a valid number"))]
fn heuristic_number_bands(#[case] label: &str, #[case] value: Value, #[case] expected: Option<&str>) {
    let field = FieldDef::number(label);
    let actual = validate_field(&field, Some(&value)).err();
    assert_eq!(actual.as_ref().map(|e| e.message.as_ref()), expected);
}

#[test]
fn enum_scenario() {
    let field = FieldDef::dropdown("Choice", ["A", "B", "C"]);
    assert!(validate_field(&field, Some(&json!("A"))).is_ok());
    assert_eq!(
        validate_field(&field, Some(&json!("D"))).unwrap_err().message,
        "Choice must be one of: A, B, C"
    );
}

#[rstest]
#[case(json!(true))]
#[case(json!("0x10"))]
#[case(json!([5]))]
fn number_fields_reject_non_numeric_shapes(#[case] value: Value) {
    let field = FieldDef::number("Quantity");
    assert_eq!(
        validate_field(&field, Some(&value)).unwrap_err().message,
        "Quantity must be a valid number"
    );
}

#[test]
fn text_limit_counts_chars_not_bytes() {
    let field = FieldDef::text("Bio");
    assert!(validate_field(&field, Some(&json!("\u{1F600}".repeat(2600)))).is_ok());
    assert_eq!(
        validate_field(&field, Some(&json!("\u{1F600}".repeat(5001))))
            .unwrap_err()
            .message,
        "Bio must be less than 5000 characters"
    );
}

#[test]
fn ids_are_public_typed_uuids() {
    let raw = formsmith_schema::id::Uuid::new_v4();
    let section = SectionId::from(raw);
    assert_eq!(section.to_string(), raw.to_string());
    assert_ne!(TemplateId::v4().to_string(), TemplateId::v4().to_string());
}

#[test]
fn unknown_field_type_message() {
    assert_eq!(
        "signature".parse::<FieldKind>().unwrap_err().to_string(),
        "Unknown field type: signature"
    );
}

proptest! {
    #[test]
    fn optional_fields_accept_absent_values(label in "[A-Za-z ]{1,20}") {
        for field in [
            FieldDef::text(label.clone()),
            FieldDef::number(label.clone()),
            FieldDef::boolean(label.clone()),
            FieldDef::dropdown(label.clone(), ["x"]),
        ] {
            prop_assert!(validate_field(&field, None).is_ok());
            prop_assert!(validate_field(&field, Some(&json!(""))).is_ok());
        }
    }

    #[test]
    fn age_band_matches_range(age in -500.0f64..500.0) {
        let field = FieldDef::number("Age");
        let ok = validate_field(&field, Some(&json!(age))).is_ok();
        prop_assert_eq!(ok, (0.0..=150.0).contains(&age));
    }

    #[test]
    fn text_under_limit_always_passes(text in "\\PC{1,200}") {
        let field = FieldDef::text("Notes");
        prop_assert!(validate_field(&field, Some(&json!(text))).is_ok());
    }
}
