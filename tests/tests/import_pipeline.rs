//! End-to-end tests for the event import pipeline.
//!
//! These tests drive the full replay flow against the in-memory store:
//! event history → replay ordering → field selection/derivation → upsert.
//!
//! The MemoryStore implements the same `AnalyticsStore` trait as a live
//! Postgres connection, so every production code path except the SQL
//! transport is exercised.

use chrono::Duration;
use integration_tests::fixtures::{
    action, action_with_declaration, action_with_status, base_time, birth_event, declared_birth,
    event_of_type, minutes_after,
};
use integration_tests::mocks::MemoryStore;

use event_forms::default_registry;
use registry_core::{ActionStatus, ActionType};
use serde_json::json;
use worker::{import_event, import_events};

/// CREATE leads the replay even when its timestamp trails the rest.
#[tokio::test]
async fn test_create_row_written_first_despite_clock_skew() {
    let create = action(ActionType::Create, minutes_after(5));
    let declare = action_with_declaration(
        ActionType::Declare,
        base_time(),
        &[("child.gender", json!("female"))],
    );
    let event = birth_event(vec![declare.clone(), create.clone()]);

    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    let rows = store.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, create.id, "CREATE row must be written first");
    assert_eq!(rows[0].action_type, "CREATE");
    assert_eq!(rows[1].id, declare.id);
}

/// Importing the same export twice leaves the store unchanged.
#[tokio::test]
async fn test_import_is_idempotent() {
    let event = declared_birth(&[
        ("child.gender", json!("male")),
        ("child.dob", json!("2024-02-20")),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_events(std::slice::from_ref(&event), &registry, &mut store)
        .await
        .expect("first import failed");
    let first_pass: Vec<_> = store.rows().into_iter().cloned().collect();

    import_events(std::slice::from_ref(&event), &registry, &mut store)
        .await
        .expect("second import failed");

    assert_eq!(store.row_count(), 2, "row count must not grow on re-import");
    let second_pass: Vec<_> = store.rows().into_iter().cloned().collect();
    assert_eq!(first_pass, second_pass);
}

/// Requested and rejected actions produce no rows and no errors.
#[tokio::test]
async fn test_requested_and_rejected_actions_skipped() {
    let event = birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_status(ActionType::Declare, ActionStatus::Requested, minutes_after(5)),
        action_with_status(ActionType::Validate, ActionStatus::Rejected, minutes_after(10)),
        action(ActionType::Register, minutes_after(15)),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    assert_eq!(store.row_count(), 2);
    let types: Vec<&str> = store.rows().iter().map(|r| r.action_type.as_str()).collect();
    assert_eq!(types, vec!["CREATE", "REGISTER"]);
}

/// Every row of an event carries the same declared/registered timestamps,
/// taken from the full history rather than the row's own cut point.
#[tokio::test]
async fn test_lifecycle_timestamps_identical_across_rows() {
    let declare_at = minutes_after(10);
    let register_at = minutes_after(30);
    let event = birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_declaration(ActionType::Declare, declare_at, &[("child.gender", json!("male"))]),
        action(ActionType::Validate, minutes_after(20)),
        action(ActionType::Register, register_at),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    for row in store.rows() {
        assert_eq!(row.declared_at, Some(declare_at), "row {}", row.action_type);
        assert_eq!(row.registered_at, Some(register_at), "row {}", row.action_type);
    }
}

/// A rejected DECLARE writes no row but still dates the declaration.
#[tokio::test]
async fn test_rejected_declare_still_sets_declared_at() {
    let declare_at = minutes_after(10);
    let event = birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_status(ActionType::Declare, ActionStatus::Rejected, declare_at),
        action(ActionType::Register, minutes_after(20)),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    assert_eq!(store.row_count(), 2, "rejected DECLARE itself has no row");
    for row in store.rows() {
        assert_eq!(row.declared_at, Some(declare_at));
    }
}

/// Only analytics-flagged declaration fields reach the store.
#[tokio::test]
async fn test_declaration_allow_list() {
    let event = declared_birth(&[
        ("child.gender", json!("female")),
        ("child.name.firstname", json!("Ada")),
        ("child.name.surname", json!("Lovelace")),
        ("mother.address", json!("12 Main St")),
        ("informant.relation", json!("MOTHER")),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    let rows = store.rows();
    let declaration = rows[1].declaration.as_object().expect("object");
    assert_eq!(declaration.get("child_gender"), Some(&json!("female")));
    assert_eq!(declaration.get("informant_relation"), Some(&json!("MOTHER")));
    assert!(!declaration.contains_key("child_name_firstname"));
    assert!(!declaration.contains_key("child_name_surname"));
    assert!(!declaration.contains_key("mother_address"));
}

/// Stored keys are flat: dots become underscores.
#[tokio::test]
async fn test_declaration_keys_flattened() {
    let event = declared_birth(&[("child.placeOfBirth", json!("HEALTH_FACILITY"))]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    let rows = store.rows();
    let declaration = rows[1].declaration.as_object().expect("object");
    assert!(declaration.contains_key("child_placeOfBirth"));
    assert!(!declaration.contains_key("child.placeOfBirth"));
}

/// Confirmed actions merge the annotation of the action they confirm,
/// current values winning, before the allow-list applies.
#[tokio::test]
async fn test_annotation_merged_from_original_action() {
    let mut requested = action_with_status(
        ActionType::PrintCertificate,
        ActionStatus::Requested,
        minutes_after(20),
    );
    requested.annotation = Some(
        [
            ("collector.requesterId".to_string(), json!("INFORMANT")),
            ("collector.identity.verified".to_string(), json!(true)),
        ]
        .into_iter()
        .collect(),
    );

    let mut accepted = action(ActionType::PrintCertificate, minutes_after(25));
    accepted.original_action_id = Some(requested.id);
    accepted.annotation = Some(
        [("collector.requesterId".to_string(), json!("MOTHER"))]
            .into_iter()
            .collect(),
    );

    let event = birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_declaration(ActionType::Declare, minutes_after(10), &[]),
        requested,
        accepted.clone(),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    let row = store.row(accepted.id).expect("accepted row");
    let annotation = row.annotation.as_object().expect("object");
    assert_eq!(
        annotation.get("collector_requesterId"),
        Some(&json!("MOTHER")),
        "current annotation value must win the merge"
    );
    assert!(
        !annotation.contains_key("collector_identity_verified"),
        "unflagged annotation fields must be filtered"
    );
}

/// Worked example: ages are derived per row from the declaration state at
/// that row's cut point and the row's own action timestamp.
#[tokio::test]
async fn test_birth_age_derived_per_row() {
    let register_at = base_time() + Duration::days(4) + Duration::minutes(90);
    let create = action(ActionType::Create, base_time());
    let declare = action_with_declaration(
        ActionType::Declare,
        minutes_after(10),
        &[("child.dob", json!("2024-02-20"))],
    );
    let register = action(ActionType::Register, register_at);
    let event = birth_event(vec![create.clone(), declare.clone(), register.clone()]);

    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    // CREATE's cut point has no child.dob yet, so no age either.
    let create_row = store.row(create.id).expect("create row");
    assert_eq!(create_row.declaration, json!({}));

    // base_time is 2024-03-01T08:00Z, ten whole days after the birth date.
    let declare_row = store.row(declare.id).expect("declare row");
    let declaration = declare_row.declaration.as_object().expect("object");
    assert_eq!(declaration.get("child_dob"), Some(&json!("2024-02-20")));
    assert_eq!(declaration.get("child_age_days"), Some(&json!(10)));

    // Four more days have passed by registration; the partial day truncates.
    let register_row = store.row(register.id).expect("register row");
    let declaration = register_row.declaration.as_object().expect("object");
    assert_eq!(declaration.get("child_age_days"), Some(&json!(14)));
    assert_eq!(register_row.declared_at, Some(declare.created_at));
    assert_eq!(register_row.registered_at, Some(register.created_at));
}

/// Unknown event types are skipped without failing the batch.
#[tokio::test]
async fn test_unsupported_event_type_skipped() {
    let unknown = event_of_type("marriage", vec![action(ActionType::Create, base_time())]);
    let supported = declared_birth(&[("child.gender", json!("male"))]);

    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_events(&[unknown, supported], &registry, &mut store)
        .await
        .expect("batch import failed");

    assert_eq!(store.row_count(), 2, "only the birth event produces rows");
    assert!(store.rows().iter().all(|r| r.event_type == "birth"));
}

/// A storage failure propagates and leaves later events unwritten.
#[tokio::test]
async fn test_storage_failure_halts_batch() {
    let first = declared_birth(&[("child.gender", json!("male"))]);
    let second = declared_birth(&[("child.gender", json!("female"))]);
    let failing_action = first.actions[1].id;

    let registry = default_registry();
    let mut store = MemoryStore::new();
    store.fail_on_action(failing_action);

    let result = import_events(&[first.clone(), second.clone()], &registry, &mut store).await;

    assert!(result.is_err());
    assert_eq!(
        store.row_count(),
        1,
        "only the CREATE row before the failure is written"
    );
    assert_eq!(store.rows()[0].event_id, first.id);
}

/// Accepted READ actions are part of the history and get rows too.
#[tokio::test]
async fn test_read_actions_produce_rows() {
    let event = birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_declaration(ActionType::Declare, minutes_after(10), &[("child.gender", json!("male"))]),
        action(ActionType::Read, minutes_after(15)),
    ]);
    let registry = default_registry();
    let mut store = MemoryStore::new();

    import_event(&event, &registry, &mut store)
        .await
        .expect("import failed");

    assert_eq!(store.row_count(), 3);
    let read_row = store.rows()[2];
    assert_eq!(read_row.action_type, "READ");
    // The READ row sees the declaration accumulated before it.
    assert_eq!(
        read_row.declaration.as_object().unwrap().get("child_gender"),
        Some(&json!("male"))
    );
}
