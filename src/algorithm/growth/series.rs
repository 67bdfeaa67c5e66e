//! Chart series
//!
//! Plot-ready points for a subject's measurements and for the reference
//! percentile curves. Rendering is left to the host.

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::growth::age::{age_in_months, chart_age};
use crate::algorithm::growth::reference::{MAX_CHART_MONTH, PercentileBand, ReferenceTable};
use crate::models::snapshot::SnapshotRef;
use crate::models::types::{Metric, Sex, SubjectId, View};

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    /// Age in months, one decimal
    pub x: f64,
    /// Measured or reference value
    pub y: f64,
}

/// One reference curve across the chart's months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSeries {
    /// Curve name, e.g. "P50"
    pub label: String,
    /// Points by month
    pub points: Vec<GrowthPoint>,
}

/// Measurements of one metric for a subject, by ascending date
///
/// Empty when the subject has no birth date.
#[must_use]
pub fn growth_points<'a>(
    snapshot: impl Into<SnapshotRef<'a>>,
    id: SubjectId,
    metric: Metric,
    use_correction: bool,
) -> Vec<GrowthPoint> {
    let snapshot = snapshot.into();
    let subject = snapshot.subject(id);
    let Some(birth_date) = subject.birth_date else {
        return Vec::new();
    };

    snapshot
        .records_for(id)
        .sorted_by_key(|record| record.date)
        .filter_map(|record| {
            let y = record.value(metric)?;
            let age = age_in_months(birth_date, record.date, subject.due_date, use_correction);
            Some(GrowthPoint {
                x: chart_age(age),
                y,
            })
        })
        .collect()
}

/// Reference percentile curves for months 0 through 24
#[must_use]
pub fn reference_bands(table: &ReferenceTable, sex: Sex, metric: Metric) -> Vec<BandSeries> {
    let rows = table
        .rows(sex, metric)
        .iter()
        .filter(|row| row.month <= MAX_CHART_MONTH)
        .sorted_by_key(|row| row.month)
        .collect_vec();

    PercentileBand::ALL
        .into_iter()
        .map(|band| BandSeries {
            label: band.to_string(),
            points: rows
                .iter()
                .map(|row| GrowthPoint {
                    x: f64::from(row.month),
                    y: row.band(band),
                })
                .collect(),
        })
        .collect()
}

/// Sex whose reference curves back the chart for a view
///
/// The comparison view always uses the boys' curves.
#[must_use]
pub fn chart_sex<'a>(snapshot: impl Into<SnapshotRef<'a>>, view: View) -> Sex {
    let snapshot = snapshot.into();
    match view {
        View::Subject(id) => snapshot.subject(id).sex,
        View::Compare => Sex::Male,
    }
}
