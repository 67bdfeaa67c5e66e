//! Tests for growth alert evaluation

use growth_curve::algorithm::growth::{AlertEvaluator, AlertKind, evaluate_alerts};
use growth_curve::{
    AlertThresholds, MeasurementRecord, Metric, Severity, Snapshot, SnapshotRef, SubjectId,
    Subjects, View,
};

use crate::utils::{born_subjects, date, reference_table, snapshot, values, weight_record};

fn evaluate(snapshot: &Snapshot, view: View) -> Vec<growth_curve::Alert> {
    AlertEvaluator::new(&reference_table()).evaluate(snapshot, view)
}

#[test]
fn test_missing_birth_date_is_informational() {
    let snapshot = Snapshot::new(
        Subjects::default(),
        vec![weight_record(SubjectId::A, date(2026, 1, 5), 3.0)],
    );

    let alerts = evaluate(&snapshot, View::Compare);
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.severity == Severity::Info));
    assert_eq!(alerts[0].kind, AlertKind::MissingBirthDate { subject: SubjectId::A });
    assert_eq!(alerts[1].kind, AlertKind::MissingBirthDate { subject: SubjectId::B });
    assert_eq!(alerts[0].message, "Twin A: please set a birth date");

    let single = evaluate(&snapshot, View::Subject(SubjectId::B));
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].kind, AlertKind::MissingBirthDate { subject: SubjectId::B });
}

#[test]
fn test_low_weight_at_birth_is_critical() {
    let snapshot = snapshot(vec![weight_record(SubjectId::A, date(2026, 1, 1), 3.0)]);

    let alerts = evaluate(&snapshot, View::Compare);
    assert_eq!(alerts.len(), 1);

    let alert = &alerts[0];
    assert_eq!(alert.severity, Severity::Critical);
    match alert.kind {
        AlertKind::BelowRange {
            subject,
            metric,
            value,
            percentile,
        } => {
            assert_eq!(subject, SubjectId::A);
            assert_eq!(metric, Metric::Weight);
            assert_eq!(value, 3.0);
            assert!(percentile < 3.0);
        }
        other => panic!("unexpected alert kind {other:?}"),
    }
    assert!(
        alert
            .message
            .starts_with("Twin A weight 3kg below 3rd percentile ("),
        "{}",
        alert.message
    );
    assert!(alert.message.ends_with("%)"));
}

#[test]
fn test_high_weight_is_caution() {
    let snapshot = snapshot(vec![weight_record(SubjectId::B, date(2026, 1, 5), 3.7)]);

    let alerts = evaluate(&snapshot, View::Subject(SubjectId::B));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Caution);
    assert!(matches!(
        alerts[0].kind,
        AlertKind::AboveRange {
            subject: SubjectId::B,
            metric: Metric::Weight,
            ..
        }
    ));
    assert!(alerts[0].message.contains("above 97th percentile"));
}

#[test]
fn test_median_values_produce_no_alerts() {
    let record = MeasurementRecord::new(
        SubjectId::A,
        date(2026, 1, 1),
        values(Some(3.3), Some(50.0), Some(34.0)),
        "",
    );
    assert!(evaluate(&snapshot(vec![record]), View::Compare).is_empty());
}

#[test]
fn test_metric_order_within_subject() {
    let record = MeasurementRecord::new(
        SubjectId::A,
        date(2026, 1, 1),
        values(Some(3.0), Some(55.0), Some(30.0)),
        "",
    );
    let alerts = evaluate(&snapshot(vec![record]), View::Compare);

    let metrics: Vec<_> = alerts
        .iter()
        .map(|alert| match alert.kind {
            AlertKind::BelowRange { metric, .. } | AlertKind::AboveRange { metric, .. } => metric,
            other => panic!("unexpected alert kind {other:?}"),
        })
        .collect();
    assert_eq!(
        metrics,
        vec![Metric::Weight, Metric::Length, Metric::HeadCircumference]
    );

    let severities: Vec<_> = alerts.iter().map(|alert| alert.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::Caution, Severity::Critical]
    );
    assert!(alerts[1].message.starts_with("Twin A length 55cm above"));
    assert!(alerts[2].message.starts_with("Twin A head circumference 30cm below"));
}

#[test]
fn test_subject_order_in_compare_view() {
    let snapshot = snapshot(vec![
        weight_record(SubjectId::B, date(2026, 1, 1), 3.0),
        weight_record(SubjectId::A, date(2026, 1, 1), 3.0),
    ]);
    let alerts: Vec<_> = evaluate(&snapshot, View::Compare)
        .into_iter()
        .filter(|alert| !matches!(alert.kind, AlertKind::WeightDivergence { .. }))
        .collect();

    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].message.starts_with("Twin A"));
    assert!(alerts[1].message.starts_with("Twin B"));
}

#[test]
fn test_no_reference_row_skips_metric() {
    // Roughly 29 months old, past the end of the table
    let snapshot = snapshot(vec![weight_record(SubjectId::A, date(2028, 6, 1), 3.0)]);
    assert!(evaluate(&snapshot, View::Subject(SubjectId::A)).is_empty());
}

#[test]
fn test_no_records_no_alerts() {
    assert!(evaluate(&snapshot(Vec::new()), View::Compare).is_empty());
}

#[test]
fn test_latest_record_is_evaluated() {
    let snapshot = snapshot(vec![
        weight_record(SubjectId::A, date(2026, 1, 2), 3.0),
        weight_record(SubjectId::A, date(2026, 1, 20), 3.8),
    ]);
    assert!(evaluate(&snapshot, View::Compare).is_empty());
}

#[test]
fn test_same_day_records_use_last_inserted() {
    let corrected = snapshot(vec![
        weight_record(SubjectId::A, date(2026, 1, 5), 3.0),
        weight_record(SubjectId::A, date(2026, 1, 5), 3.3),
    ]);
    assert!(evaluate(&corrected, View::Compare).is_empty());

    let reversed = snapshot(vec![
        weight_record(SubjectId::A, date(2026, 1, 5), 3.3),
        weight_record(SubjectId::A, date(2026, 1, 5), 3.0),
    ]);
    let alerts = evaluate(&reversed, View::Compare);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
}

#[test]
fn test_corrected_age_changes_reference_month() {
    // Born 59 days early; measured two calendar months after birth
    let snapshot = snapshot(vec![weight_record(SubjectId::A, date(2026, 3, 1), 3.3)]);
    let table = reference_table();

    let raw = AlertEvaluator::new(&table).evaluate(&snapshot, View::Compare);
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].severity, Severity::Critical);

    let corrected = AlertEvaluator::new(&table)
        .with_correction(true)
        .evaluate(&snapshot, View::Compare);
    assert!(corrected.is_empty());
}

fn divergence(weight_a: f64, weight_b: f64, view: View) -> Vec<growth_curve::Alert> {
    let snapshot = Snapshot::new(
        Subjects::default(),
        vec![
            weight_record(SubjectId::A, date(2026, 2, 1), weight_a),
            weight_record(SubjectId::B, date(2026, 2, 3), weight_b),
        ],
    );
    evaluate(&snapshot, view)
        .into_iter()
        .filter(|alert| matches!(alert.kind, AlertKind::WeightDivergence { .. }))
        .collect()
}

#[test]
fn test_twenty_percent_gap_is_critical() {
    let alerts = divergence(4.0, 3.2, View::Compare);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].message, "Twin weight gap 20%: check immediately");
}

#[test]
fn test_ten_percent_gap_is_caution() {
    let alerts = divergence(3.6, 4.0, View::Compare);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Caution);
    assert_eq!(alerts[0].message, "Twin weight gap 10%: monitor");
}

#[test]
fn test_small_gap_is_silent() {
    assert!(divergence(4.0, 3.604, View::Compare).is_empty());
    assert!(divergence(4.0, 4.0, View::Compare).is_empty());
}

#[test]
fn test_divergence_checked_in_single_view_and_last() {
    let snapshot = Snapshot::new(
        Subjects::default(),
        vec![
            weight_record(SubjectId::A, date(2026, 2, 1), 4.0),
            weight_record(SubjectId::B, date(2026, 2, 1), 3.0),
        ],
    );
    let alerts = evaluate(&snapshot, View::Subject(SubjectId::A));

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::MissingBirthDate { subject: SubjectId::A });
    assert!(matches!(alerts[1].kind, AlertKind::WeightDivergence { .. }));
}

#[test]
fn test_divergence_needs_weight_on_latest_records() {
    let snapshot = Snapshot::new(
        Subjects::default(),
        vec![
            weight_record(SubjectId::A, date(2026, 2, 1), 4.0),
            weight_record(SubjectId::B, date(2026, 2, 1), 3.0),
            MeasurementRecord::new(
                SubjectId::B,
                date(2026, 2, 10),
                values(None, Some(52.0), None),
                "",
            ),
        ],
    );
    let alerts = evaluate(&snapshot, View::Compare);
    assert!(
        alerts
            .iter()
            .all(|alert| !matches!(alert.kind, AlertKind::WeightDivergence { .. }))
    );
}

#[test]
fn test_custom_thresholds() {
    let snapshot = snapshot(vec![weight_record(SubjectId::A, date(2026, 1, 1), 3.0)]);
    let thresholds = AlertThresholds {
        low_percentile: 0.5,
        ..AlertThresholds::default()
    };
    let alerts = AlertEvaluator::new(&reference_table())
        .with_thresholds(thresholds)
        .evaluate(&snapshot, View::Compare);
    assert!(alerts.is_empty());
}

#[test]
fn test_evaluation_is_idempotent() {
    let snapshot = snapshot(vec![
        weight_record(SubjectId::A, date(2026, 1, 1), 3.0),
        weight_record(SubjectId::B, date(2026, 1, 1), 3.7),
    ]);
    let table = reference_table();

    let first = evaluate_alerts(
        &snapshot.subjects,
        &snapshot.records,
        &table,
        View::Compare,
        false,
    );
    let second = evaluate_alerts(
        &snapshot.subjects,
        &snapshot.records,
        &table,
        View::Compare,
        false,
    );
    assert_eq!(first, second);
    assert_eq!(first, AlertEvaluator::new(&table).evaluate(&snapshot, View::Compare));
    assert_eq!(first.len(), 3);
}

#[test]
fn test_evaluate_borrowed_parts() {
    let subjects = born_subjects();
    let history = vec![
        weight_record(SubjectId::A, date(2026, 1, 1), 3.0),
        weight_record(SubjectId::B, date(2026, 1, 1), 3.7),
        weight_record(SubjectId::A, date(2026, 2, 1), 3.8),
    ];
    let table = reference_table();

    // Only the first two records are visible through the slice
    let early = evaluate_alerts(&subjects, &history[..2], &table, View::Compare, false);
    let owned = Snapshot::new(subjects.clone(), history[..2].to_vec());
    assert_eq!(early, AlertEvaluator::new(&table).evaluate(&owned, View::Compare));
    assert_eq!(early.len(), 3);

    let current = AlertEvaluator::new(&table)
        .evaluate(SnapshotRef::new(&subjects, &history), View::Compare);
    assert_eq!(
        current,
        evaluate_alerts(&subjects, &history, &table, View::Compare, false)
    );
    assert_eq!(current.len(), 1);
    assert!(matches!(
        current[0].kind,
        AlertKind::AboveRange {
            subject: SubjectId::B,
            metric: Metric::Weight,
            ..
        }
    ));
}
