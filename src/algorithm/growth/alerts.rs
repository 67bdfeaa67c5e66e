//! Growth alerts
//!
//! Alerts are derived on every evaluation and never stored. For each subject
//! in view (fixed order A, B):
//! - no birth date: one informational alert, nothing else for that subject
//! - per metric of the latest record (weight, length, head circumference):
//!   critical below the low percentile, caution above the high percentile
//!
//! After the subjects, the twins' latest weights are compared regardless of
//! the view. Missing data anywhere silently skips the affected check.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::algorithm::growth::reference::ReferenceTable;
use crate::algorithm::growth::status::{
    PercentileClass, WeightGap, reaches, subject_status, weight_gap,
};
use crate::config::AlertThresholds;
use crate::models::measurement::MeasurementRecord;
use crate::models::snapshot::SnapshotRef;
use crate::models::subject::Subjects;
use crate::models::types::{Metric, Severity, SubjectId, View};

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AlertKind {
    /// Subject has no birth date, so no percentiles can be computed
    MissingBirthDate {
        /// Subject concerned
        subject: SubjectId,
    },
    /// Latest value below the low percentile threshold
    BelowRange {
        /// Subject concerned
        subject: SubjectId,
        /// Metric concerned
        metric: Metric,
        /// Measured value
        value: f64,
        /// Computed percentile
        percentile: f64,
    },
    /// Latest value above the high percentile threshold
    AboveRange {
        /// Subject concerned
        subject: SubjectId,
        /// Metric concerned
        metric: Metric,
        /// Measured value
        value: f64,
        /// Computed percentile
        percentile: f64,
    },
    /// Twins' latest weights differ notably
    WeightDivergence {
        /// Gap as a percentage of the heavier weight
        gap_percent: f64,
    },
}

/// Advisory flag shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Severity tier
    pub severity: Severity,
    /// Structured cause
    pub kind: AlertKind,
    /// Rendered text
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Evaluates alerts against a fixed reference table and thresholds
#[derive(Debug, Clone, Copy)]
pub struct AlertEvaluator<'a> {
    table: &'a ReferenceTable,
    thresholds: AlertThresholds,
    use_correction: bool,
}

impl<'a> AlertEvaluator<'a> {
    /// Evaluator with default thresholds and uncorrected ages
    #[must_use]
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self {
            table,
            thresholds: AlertThresholds::default(),
            use_correction: false,
        }
    }

    /// Use custom thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: AlertThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Correct ages for prematurity
    #[must_use]
    pub const fn with_correction(mut self, use_correction: bool) -> Self {
        self.use_correction = use_correction;
        self
    }

    /// All alerts for a snapshot, in display order
    #[must_use]
    pub fn evaluate<'s>(&self, snapshot: impl Into<SnapshotRef<'s>>, view: View) -> Vec<Alert> {
        let snapshot = snapshot.into();
        let mut alerts = Vec::new();

        for id in view.subjects() {
            self.subject_alerts(snapshot, id, &mut alerts);
        }
        if let Some(alert) = self.divergence_alert(snapshot) {
            alerts.push(alert);
        }

        debug!("Evaluated {} alerts for {view:?}", alerts.len());
        alerts
    }

    fn subject_alerts(&self, snapshot: SnapshotRef<'_>, id: SubjectId, alerts: &mut Vec<Alert>) {
        let subject = snapshot.subject(id);
        if subject.birth_date.is_none() {
            alerts.push(Alert {
                severity: Severity::Info,
                kind: AlertKind::MissingBirthDate { subject: id },
                message: format!("{}: please set a birth date", subject.name),
            });
            return;
        }

        let Some(status) = subject_status(
            snapshot,
            self.table,
            id,
            self.use_correction,
            &self.thresholds,
        ) else {
            return;
        };

        for metric_status in &status.metrics {
            let (Some(value), Some(percentile), Some(class)) = (
                metric_status.value,
                metric_status.percentile,
                metric_status.class,
            ) else {
                continue;
            };
            let metric = metric_status.metric;

            let (severity, kind, bound) = match class {
                PercentileClass::Normal => continue,
                PercentileClass::Low => (
                    Severity::Critical,
                    AlertKind::BelowRange {
                        subject: id,
                        metric,
                        value,
                        percentile,
                    },
                    format!("below {} percentile", ordinal(self.thresholds.low_percentile)),
                ),
                PercentileClass::High => (
                    Severity::Caution,
                    AlertKind::AboveRange {
                        subject: id,
                        metric,
                        value,
                        percentile,
                    },
                    format!("above {} percentile", ordinal(self.thresholds.high_percentile)),
                ),
            };

            alerts.push(Alert {
                severity,
                kind,
                message: format!(
                    "{} {} {}{} {} ({:.1}%)",
                    subject.name,
                    metric.label(),
                    value,
                    metric.unit(),
                    bound,
                    percentile
                ),
            });
        }
    }

    fn divergence_alert(&self, snapshot: SnapshotRef<'_>) -> Option<Alert> {
        let WeightGap { gap_percent, .. } = weight_gap(snapshot)?;

        let (severity, advice) = if reaches(gap_percent, self.thresholds.divergence_critical) {
            (Severity::Critical, "check immediately")
        } else if reaches(gap_percent, self.thresholds.divergence_caution) {
            (Severity::Caution, "monitor")
        } else {
            return None;
        };

        Some(Alert {
            severity,
            kind: AlertKind::WeightDivergence { gap_percent },
            message: format!("Twin weight gap {gap_percent:.0}%: {advice}"),
        })
    }
}

/// Evaluate alerts with default thresholds
///
/// Pure function of its inputs; calling it twice on the same data yields
/// the same list.
#[must_use]
pub fn evaluate_alerts(
    subjects: &Subjects,
    records: &[MeasurementRecord],
    table: &ReferenceTable,
    view: View,
    use_correction: bool,
) -> Vec<Alert> {
    AlertEvaluator::new(table)
        .with_correction(use_correction)
        .evaluate(SnapshotRef::new(subjects, records), view)
}

fn ordinal(percentile: f64) -> String {
    let n = percentile.round() as i64;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
