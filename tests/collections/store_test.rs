//! Tests for the record store

use growth_curve::algorithm::growth::AlertEvaluator;
use growth_curve::collections::{GrowthStore, IMPORT_NOTE, ImportedMeasurement};
use growth_curve::{MeasurementSet, Metric, Severity, StoreEvent, SubjectId, SubjectPatch, View};

use crate::utils::{date, reference_table};

#[test]
fn test_mutations_then_reevaluate() {
    let table = reference_table();
    let mut store = GrowthStore::default();

    let before = AlertEvaluator::new(&table).evaluate(store.snapshot(), View::Compare);
    assert_eq!(before.len(), 2);
    assert!(before.iter().all(|a| a.severity == Severity::Info));

    for id in SubjectId::ALL {
        store.update_subject(
            id,
            SubjectPatch {
                birth_date: Some(Some(date(2026, 1, 1))),
                ..SubjectPatch::default()
            },
        );
    }
    let id = store
        .add_record(SubjectId::A, date(2026, 1, 1), MeasurementSet::weight(3.0).unwrap(), "")
        .id;

    let after = AlertEvaluator::new(&table).evaluate(store.snapshot(), View::Compare);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].severity, Severity::Critical);

    store
        .amend_record(id, MeasurementSet::weight(3.3).unwrap(), None)
        .unwrap();
    assert!(
        AlertEvaluator::new(&table)
            .evaluate(store.snapshot(), View::Compare)
            .is_empty()
    );
}

#[test]
fn test_import_skips_existing_days() {
    let mut store = GrowthStore::default();
    store.add_record(
        SubjectId::A,
        date(2026, 2, 1),
        MeasurementSet::weight(4.0).unwrap(),
        "manual",
    );
    let mut rx = store.subscribe();

    let entries: Vec<ImportedMeasurement> = serde_json::from_str(
        r#"[
            {"baby": "a", "date": "2026-02-01", "weight": 4.1, "height": null, "headCirc": null},
            {"baby": "a", "date": "2026-02-08", "weight": 4.3, "height": 53.0, "headCirc": null},
            {"baby": "b", "date": "2026-02-01", "weight": 3.8, "height": null, "headCirc": null},
            {"baby": "b", "date": "2026-02-01", "weight": 3.9, "height": null, "headCirc": null},
            {"baby": "b", "date": "2026-02-08", "weight": null, "height": null, "headCirc": null}
        ]"#,
    )
    .unwrap();

    let imported = store.import_records(entries);
    assert_eq!(imported, 2);
    assert_eq!(store.snapshot().records.len(), 3);
    assert_eq!(store.snapshot().records[0].note, "manual");
    assert!(
        store.snapshot().records[1..]
            .iter()
            .all(|r| r.note == IMPORT_NOTE)
    );
    assert_eq!(rx.try_recv().unwrap(), StoreEvent::Refreshed);
}

#[test]
fn test_every_subscriber_sees_events() {
    let mut store = GrowthStore::default().with_event_capacity(8);
    let mut first = store.subscribe();
    let mut second = store.subscribe();

    let id = store
        .add_record(SubjectId::B, date(2026, 2, 1), MeasurementSet::weight(3.1).unwrap(), "")
        .id;
    store.remove_record(id).unwrap();

    for rx in [&mut first, &mut second] {
        assert!(matches!(rx.try_recv().unwrap(), StoreEvent::RecordAdded(_)));
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::RecordRemoved(id));
    }
}

#[test]
fn test_import_parses_exported_dates() {
    let mut store = GrowthStore::default();
    let entries: Vec<ImportedMeasurement> = serde_json::from_str(
        r#"[
            {"baby": "a", "date": "2026-02-01T08:15:00.000Z", "weight": 4.1},
            {"baby": "a", "date": "2026-02-01", "weight": 4.2},
            {"baby": "b", "date": "08.02.2026", "weight": 3.9},
            {"baby": "b", "date": "2026-02-31", "weight": 4.0},
            {"baby": "b", "date": "soon", "weight": 4.0}
        ]"#,
    )
    .unwrap();

    assert_eq!(store.import_records(entries), 2);
    let records = &store.snapshot().records;
    assert_eq!(records[0].date, date(2026, 2, 1));
    assert_eq!(records[0].value(Metric::Weight), Some(4.1));
    assert_eq!(records[1].subject, SubjectId::B);
    assert_eq!(records[1].date, date(2026, 2, 8));
}
