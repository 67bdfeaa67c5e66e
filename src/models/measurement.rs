//! Measurement records
//!
//! A record holds one visit's measurements for one subject. The raw host
//! input (`MeasurementInput`) has three independent optional values; it is
//! converted into a `MeasurementSet` at the creation boundary, which
//! guarantees at least one value is present and all present values are
//! positive and finite.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GrowthError;
use crate::models::types::{Metric, SubjectId};

/// Unvalidated measurement values as submitted by a host
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInput {
    /// Weight in kg
    #[serde(default)]
    pub weight: Option<f64>,
    /// Length in cm
    #[serde(default, rename = "height")]
    pub length: Option<f64>,
    /// Head circumference in cm
    #[serde(default, rename = "headCirc")]
    pub head_circumference: Option<f64>,
}

impl MeasurementInput {
    /// Value for a metric, if given
    #[must_use]
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight,
            Metric::Length => self.length,
            Metric::HeadCircumference => self.head_circumference,
        }
    }
}

/// Validated set of measurements; never empty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeasurementInput", into = "MeasurementInput")]
pub struct MeasurementSet {
    values: MeasurementInput,
}

impl MeasurementSet {
    /// Set holding only a weight
    pub fn weight(kg: f64) -> Result<Self, GrowthError> {
        Self::try_from(MeasurementInput {
            weight: Some(kg),
            ..MeasurementInput::default()
        })
    }

    /// Value for a metric, if measured
    #[must_use]
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        self.values.value(metric)
    }

    /// Metrics present in this set, in fixed order
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL
            .into_iter()
            .filter(|metric| self.value(*metric).is_some())
    }
}

impl TryFrom<MeasurementInput> for MeasurementSet {
    type Error = GrowthError;

    fn try_from(values: MeasurementInput) -> Result<Self, Self::Error> {
        let mut present = 0;
        for metric in Metric::ALL {
            if let Some(value) = values.value(metric) {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GrowthError::InvalidMeasurement { metric, value });
                }
                present += 1;
            }
        }

        if present == 0 {
            return Err(GrowthError::EmptyMeasurement);
        }
        Ok(Self { values })
    }
}

impl From<MeasurementSet> for MeasurementInput {
    fn from(set: MeasurementSet) -> Self {
        set.values
    }
}

/// One dated measurement entry for a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Subject the record belongs to
    #[serde(rename = "baby")]
    pub subject: SubjectId,
    /// Day the measurements were taken
    pub date: NaiveDate,
    /// Measured values
    #[serde(flatten)]
    pub values: MeasurementSet,
    /// Free-text note
    #[serde(default)]
    pub note: String,
    /// When the record was first stored
    pub created_at: DateTime<Utc>,
}

impl MeasurementRecord {
    /// Create a record with a fresh identifier and creation time
    #[must_use]
    pub fn new(
        subject: SubjectId,
        date: NaiveDate,
        values: MeasurementSet,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject,
            date,
            values,
            note: note.into(),
            created_at: Utc::now(),
        }
    }

    /// Value for a metric, if measured
    #[must_use]
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        self.values.value(metric)
    }
}

/// Latest record for a subject
///
/// Greatest date wins; among records sharing that date the one stored last
/// wins, so a same-day correction entered later supersedes the earlier one.
#[must_use]
pub fn latest_record(records: &[MeasurementRecord], subject: SubjectId) -> Option<&MeasurementRecord> {
    // `max_by_key` yields the last of equal maxima
    records
        .iter()
        .filter(|record| record.subject == subject)
        .max_by_key(|record| record.date)
}
