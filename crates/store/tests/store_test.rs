//! Behavior of the template store: limits, ordering, timestamps,
//! submissions and persistence.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use formsmith_schema::prelude::*;
use formsmith_storage::{KeyValueStore, MemoryStorage};
use formsmith_store::{ManualClock, StoreConfig, StoreError, TemplateStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

type TestStore = TemplateStore<Arc<MemoryStorage>, Arc<ManualClock>>;

fn store_with(config: StoreConfig) -> (TestStore, Arc<MemoryStorage>, Arc<ManualClock>) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(start()));
    let store = TemplateStore::with_clock(Arc::clone(&storage), Arc::clone(&clock), config).unwrap();
    (store, storage, clock)
}

fn store() -> (TestStore, Arc<MemoryStorage>, Arc<ManualClock>) {
    store_with(StoreConfig::default())
}

#[test]
fn sixth_template_exceeds_default_limit() {
    let (mut store, _, _) = store();
    for i in 0..5 {
        store.create_template(format!("T{i}"), None).unwrap();
    }
    let err = store.create_template("T5", None).unwrap_err();
    assert!(matches!(err, StoreError::LimitExceeded { max: 5 }));
    assert_eq!(err.to_string(), "Maximum 5 templates allowed");
    assert_eq!(store.templates().len(), 5);
}

#[rstest]
#[case(1)]
#[case(3)]
fn configurable_limit(#[case] max: usize) {
    let (mut store, _, _) = store_with(StoreConfig::default().with_max_templates(max));
    for i in 0..max {
        store.create_template(format!("T{i}"), None).unwrap();
    }
    assert!(matches!(
        store.create_template("extra", None),
        Err(StoreError::LimitExceeded { max: m }) if m == max
    ));
}

#[test]
fn deleting_frees_a_slot() {
    let (mut store, _, _) = store_with(StoreConfig::default().with_max_templates(1));
    let t = store.create_template("Only", None).unwrap();
    store.delete_template(t.id).unwrap();
    assert!(store.create_template("Again", None).is_ok());
}

#[test]
fn new_template_has_equal_timestamps_and_description() {
    let (mut store, _, _) = store();
    let t = store
        .create_template("Survey", Some("Quarterly check-in".into()))
        .unwrap();
    assert_eq!(t.created_at, start());
    assert_eq!(t.updated_at, start());
    assert_eq!(t.description.as_deref(), Some("Quarterly check-in"));
    assert!(t.sections.is_empty());
}

#[test]
fn section_delete_keeps_gap_until_reorder() {
    let (mut store, _, _) = store();
    let t = store.create_template("T", None).unwrap();
    let a = store.add_section(t.id, "A").unwrap();
    let b = store.add_section(t.id, "B").unwrap();

    store.delete_section(t.id, a).unwrap();
    let current = store.template(t.id).unwrap();
    assert_eq!(current.sections.len(), 1);
    assert_eq!(current.section(b).unwrap().order, 1);

    let sections = current.sections.clone();
    store.reorder_sections(t.id, sections).unwrap();
    assert_eq!(store.template(t.id).unwrap().section(b).unwrap().order, 0);
}

#[test]
fn fields_get_fresh_ids_and_positions() {
    let (mut store, _, _) = store();
    let t = store.create_template("T", None).unwrap();
    let s = store.add_section(t.id, "S").unwrap();

    let draft = FieldDef::text("Name");
    let draft_id = draft.id();
    let name = store.add_field(t.id, s, draft).unwrap();
    let age = store.add_field(t.id, s, FieldDef::number("Age")).unwrap();
    assert_ne!(name, draft_id);

    let section = store.template(t.id).unwrap().section(s).unwrap().clone();
    assert_eq!(section.field(name).unwrap().order(), 0);
    assert_eq!(section.field(age).unwrap().order(), 1);

    store.delete_field(t.id, s, name).unwrap();
    let section = store.template(t.id).unwrap().section(s).unwrap().clone();
    assert_eq!(section.field(age).unwrap().order(), 1);

    store.reorder_fields(t.id, s, section.fields.clone()).unwrap();
    let section = store.template(t.id).unwrap().section(s).unwrap();
    assert_eq!(section.field(age).unwrap().order(), 0);
}

#[test]
fn update_field_and_section_replace_in_place() {
    let (mut store, _, _) = store();
    let t = store.create_template("T", None).unwrap();
    let s = store.add_section(t.id, "Old title").unwrap();
    let f = store.add_field(t.id, s, FieldDef::text("Name")).unwrap();

    let mut field = store.template(t.id).unwrap().field(f).unwrap().clone();
    field.set_required(true);
    store.update_field(t.id, s, field).unwrap();
    assert!(store.template(t.id).unwrap().field(f).unwrap().is_required());

    let mut section = store.template(t.id).unwrap().section(s).unwrap().clone();
    section.title = "New title".into();
    store.update_section(t.id, section).unwrap();
    assert_eq!(store.template(t.id).unwrap().section(s).unwrap().title, "New title");
    assert!(store.template(t.id).unwrap().field(f).is_some());
}

#[test]
fn missing_ids_are_typed() {
    let (mut store, _, _) = store();
    let t = store.create_template("T", None).unwrap();
    let s = store.add_section(t.id, "S").unwrap();

    assert!(matches!(
        store.delete_template(TemplateId::v4()),
        Err(StoreError::TemplateNotFound { .. })
    ));
    assert!(matches!(
        store.add_field(t.id, SectionId::v4(), FieldDef::text("x")),
        Err(StoreError::SectionNotFound { .. })
    ));
    assert!(matches!(
        store.delete_field(t.id, s, FieldId::v4()),
        Err(StoreError::FieldNotFound { .. })
    ));
    assert!(matches!(
        store.update_field(t.id, s, FieldDef::text("ghost")),
        Err(StoreError::FieldNotFound { .. })
    ));
}

#[test]
fn updated_at_never_decreases_even_if_clock_goes_back() {
    let (mut store, _, clock) = store();
    let t = store.create_template("T", None).unwrap();

    clock.advance(Duration::minutes(5));
    let s = store.add_section(t.id, "S").unwrap();
    let after_add = store.template(t.id).unwrap().updated_at;
    assert_eq!(after_add, start() + Duration::minutes(5));

    clock.set(start() - Duration::hours(1));
    store.add_field(t.id, s, FieldDef::text("Name")).unwrap();
    let after_field = store.template(t.id).unwrap().updated_at;
    assert!(after_field >= after_add);
    assert!(after_field >= store.template(t.id).unwrap().created_at);
}

#[test]
fn update_template_keeps_created_at() {
    let (mut store, _, clock) = store();
    let t = store.create_template("T", None).unwrap();

    clock.advance(Duration::seconds(30));
    let mut edited = t.clone();
    edited.name = "Renamed".into();
    edited.created_at = start() + Duration::days(10);
    edited.updated_at = start() - Duration::days(10);
    store.update_template(edited).unwrap();

    let stored = store.template(t.id).unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.created_at, start());
    assert_eq!(stored.updated_at, start() + Duration::seconds(30));
}

#[test]
fn active_template_tracks_mutations_and_deletion() {
    let (mut store, _, _) = store();
    let t = store.create_template("T", None).unwrap();
    assert!(store.active_template().is_none());

    store.set_active_template(Some(t.id)).unwrap();
    store.add_section(t.id, "S").unwrap();
    assert_eq!(store.active_template().unwrap().sections.len(), 1);

    store.delete_template(t.id).unwrap();
    assert!(store.active_template().is_none());
    assert!(matches!(
        store.set_active_template(Some(t.id)),
        Err(StoreError::TemplateNotFound { .. })
    ));
}

#[test]
fn survey_submission_flow() {
    let (mut store, _, _) = store();
    let t = store.create_template("Survey", None).unwrap();
    let s = store.add_section(t.id, "Intake").unwrap();
    let age = store
        .add_field(t.id, s, FieldDef::number("Age").required())
        .unwrap();

    let err = store.submit_form(t.id, FormValues::new()).unwrap_err();
    let StoreError::InvalidSubmission { errors, .. } = err else {
        panic!("expected InvalidSubmission");
    };
    assert_eq!(errors.message(age), Some("Age is required"));

    let err = store
        .submit_form(t.id, FormValues::new().with_field(age, json!("200")))
        .unwrap_err();
    let StoreError::InvalidSubmission { errors, .. } = err else {
        panic!("expected InvalidSubmission");
    };
    assert_eq!(errors.message(age), Some("Age must be between 0 and 150"));

    let submission = store
        .submit_form(t.id, FormValues::new().with_field(age, json!("30")))
        .unwrap();
    assert_eq!(submission.template_id, t.id);
    assert_eq!(submission.submitted_at, start());
    assert_eq!(store.submissions(None).len(), 1);
}

#[test]
fn submissions_outlive_their_template() {
    let (mut store, _, _) = store();
    let a = store.create_template("A", None).unwrap();
    let b = store.create_template("B", None).unwrap();
    store.submit_form(a.id, FormValues::new()).unwrap();
    store.submit_form(b.id, FormValues::new()).unwrap();
    store.submit_form(b.id, FormValues::new()).unwrap();

    assert_eq!(store.submissions(Some(b.id)).len(), 2);
    store.delete_template(b.id).unwrap();
    assert_eq!(store.submissions(Some(b.id)).len(), 2);
    assert_eq!(store.submissions(None).len(), 3);
}

#[test]
fn flat_policy_from_config() {
    let (mut store, _, _) =
        store_with(StoreConfig::default().with_number_policy(NumberPolicy::Flat));
    let t = store.create_template("T", None).unwrap();
    let s = store.add_section(t.id, "S").unwrap();
    let age = store.add_field(t.id, s, FieldDef::number("Age")).unwrap();
    assert!(store
        .submit_form(t.id, FormValues::new().with_field(age, json!(200)))
        .is_ok());
}

#[test]
fn everything_round_trips_through_storage() {
    let (mut store, storage, clock) = store();
    let t = store.create_template("Survey", None).unwrap();
    let s = store.add_section(t.id, "Intake").unwrap();
    let f = store
        .add_field(t.id, s, FieldDef::dropdown("Size", ["S", "M"]))
        .unwrap();
    store
        .submit_form(t.id, FormValues::new().with_field(f, json!("M")))
        .unwrap();

    let raw = storage.get("form-builder-templates").unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["sections"][0]["fields"][0]["type"], "enum");
    assert!(stored[0]["updatedAt"].is_string());
    assert!(storage.get("form-builder-submissions").unwrap().is_some());

    let reopened: TestStore =
        TemplateStore::with_clock(Arc::clone(&storage), clock, StoreConfig::default()).unwrap();
    assert_eq!(reopened.templates(), store.templates());
    assert_eq!(reopened.submissions(None), store.submissions(None));
    assert!(reopened.active_template().is_none());
}

#[test]
fn check_template_reports_structure() {
    let (mut store, _, _) = store();
    let t = store.create_template("Survey", None).unwrap();
    let messages: Vec<String> = store
        .check_template(t.id)
        .unwrap()
        .into_iter()
        .map(|e| e.message.into_owned())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Template must have at least one section",
            "Template must have at least one field",
        ]
    );
}

proptest! {
    #[test]
    fn reordering_to_current_order_is_idempotent(count in 0usize..8) {
        let (mut store, _, _) = store();
        let t = store.create_template("T", None).unwrap();
        for i in 0..count {
            store.add_section(t.id, format!("S{i}")).unwrap();
        }
        let current = store.template(t.id).unwrap().sections.clone();
        store.reorder_sections(t.id, current.clone()).unwrap();
        let after = &store.template(t.id).unwrap().sections;
        prop_assert_eq!(after, &current);
        for (index, section) in after.iter().enumerate() {
            prop_assert_eq!(section.order, index);
        }
    }

    #[test]
    fn updated_at_is_monotonic(steps in prop::collection::vec(-120i64..120, 1..20)) {
        let (mut store, _, clock) = store();
        let t = store.create_template("T", None).unwrap();
        let mut last = t.updated_at;
        for step in steps {
            clock.advance(Duration::seconds(step));
            store.add_section(t.id, "S").unwrap();
            let now = store.template(t.id).unwrap().updated_at;
            prop_assert!(now >= last);
            last = now;
        }
    }
}
