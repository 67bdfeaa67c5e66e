//! Per-subject status summaries
//!
//! For the latest record of a subject, computes the age and, per metric, the
//! measured value, its percentile and which side of the alert thresholds it
//! falls on. Also summarizes the weight gap between the twins.

use chrono::NaiveDate;
use log::debug;

use crate::algorithm::growth::age::age_in_months;
use crate::algorithm::growth::reference::ReferenceTable;
use crate::config::AlertThresholds;
use crate::models::measurement::MeasurementRecord;
use crate::models::snapshot::SnapshotRef;
use crate::models::subject::Subject;
use crate::models::types::{Metric, SubjectId};

/// Position of a percentile relative to the alert thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileClass {
    /// Below the low threshold
    Low,
    /// Within the thresholds (inclusive)
    Normal,
    /// Above the high threshold
    High,
}

impl PercentileClass {
    /// Classify a percentile
    #[must_use]
    pub fn classify(percentile: f64, thresholds: &AlertThresholds) -> Self {
        if percentile < thresholds.low_percentile {
            Self::Low
        } else if percentile > thresholds.high_percentile {
            Self::High
        } else {
            Self::Normal
        }
    }
}

/// One metric of a subject's latest record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStatus {
    /// Metric described
    pub metric: Metric,
    /// Measured value, if recorded
    pub value: Option<f64>,
    /// Percentile, if a reference row exists for the age
    pub percentile: Option<f64>,
    /// Threshold classification of the percentile
    pub class: Option<PercentileClass>,
}

/// Summary of a subject's latest record
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStatus {
    /// Subject described
    pub subject: SubjectId,
    /// Date of the latest record
    pub date: NaiveDate,
    /// Age in months at that date
    pub age_months: f64,
    /// Weight, length and head circumference, in that order
    pub metrics: Vec<MetricStatus>,
}

impl SubjectStatus {
    /// Status of one metric
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<&MetricStatus> {
        self.metrics.iter().find(|status| status.metric == metric)
    }
}

/// Status of a subject's latest record
///
/// `None` when the subject has no birth date or no records.
#[must_use]
pub fn subject_status<'a>(
    snapshot: impl Into<SnapshotRef<'a>>,
    table: &ReferenceTable,
    id: SubjectId,
    use_correction: bool,
    thresholds: &AlertThresholds,
) -> Option<SubjectStatus> {
    let snapshot = snapshot.into();
    let subject = snapshot.subject(id);
    let birth_date = subject.birth_date?;
    let latest = snapshot.latest(id)?;

    let age_months = age_in_months(birth_date, latest.date, subject.due_date, use_correction);
    debug!(
        "Subject {id} latest record {} at {age_months:.2} months",
        latest.date
    );

    let metrics = Metric::ALL
        .into_iter()
        .map(|metric| {
            let value = latest.value(metric);
            let percentile = metric_percentile(table, subject, latest, metric, age_months);
            MetricStatus {
                metric,
                value,
                percentile,
                class: percentile.map(|p| PercentileClass::classify(p, thresholds)),
            }
        })
        .collect();

    Some(SubjectStatus {
        subject: id,
        date: latest.date,
        age_months,
        metrics,
    })
}

/// Percentile of one metric of a record at a given age
#[must_use]
pub fn metric_percentile(
    table: &ReferenceTable,
    subject: &Subject,
    record: &MeasurementRecord,
    metric: Metric,
    age_months: f64,
) -> Option<f64> {
    let value = record.value(metric)?;
    let row = table.lookup(subject.sex, metric, age_months)?;
    row.percentile_of(value)
}

/// Latest weights of both twins and the gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightGap {
    /// Latest weight of subject A
    pub weight_a: f64,
    /// Latest weight of subject B
    pub weight_b: f64,
    /// Difference as a percentage of the heavier weight
    pub gap_percent: f64,
}

impl WeightGap {
    /// Build from two weights
    #[must_use]
    pub fn new(weight_a: f64, weight_b: f64) -> Self {
        Self {
            weight_a,
            weight_b,
            gap_percent: relative_gap(weight_a, weight_b),
        }
    }

    /// Whether the gap reaches the caution threshold
    #[must_use]
    pub fn is_concerning(&self, thresholds: &AlertThresholds) -> bool {
        reaches(self.gap_percent, thresholds.divergence_caution)
    }
}

/// Weight gap between the twins' latest records
///
/// Each twin's latest record must carry a weight; the records need not be
/// from the same day.
#[must_use]
pub fn weight_gap<'a>(snapshot: impl Into<SnapshotRef<'a>>) -> Option<WeightGap> {
    let snapshot = snapshot.into();
    let weight_a = snapshot.latest(SubjectId::A)?.value(Metric::Weight)?;
    let weight_b = snapshot.latest(SubjectId::B)?.value(Metric::Weight)?;
    Some(WeightGap::new(weight_a, weight_b))
}

/// `(max - min) / max * 100`
#[must_use]
pub fn relative_gap(first: f64, second: f64) -> f64 {
    let bigger = first.max(second);
    let smaller = first.min(second);
    (bigger - smaller) / bigger * 100.0
}

/// Threshold comparison tolerant of decimal representation error
#[must_use]
pub fn reaches(value: f64, threshold: f64) -> bool {
    value + 1e-9 >= threshold
}
