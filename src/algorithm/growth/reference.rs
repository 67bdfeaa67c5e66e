//! WHO reference table access
//!
//! The reference dataset holds, per sex and metric, one row per integer month
//! with the LMS parameters and the named percentile curves. Lookups snap the
//! age to the nearest month; there is no interpolation between months.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::growth::lms;
use crate::models::types::{Metric, Sex};

/// Last month covered by the charts
pub const MAX_CHART_MONTH: u32 = 24;

/// Named reference curves carried by every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentileBand {
    /// 3rd percentile
    P3,
    /// 15th percentile
    P15,
    /// Median
    P50,
    /// 85th percentile
    P85,
    /// 97th percentile
    P97,
}

impl PercentileBand {
    /// All bands from lowest to highest
    pub const ALL: [Self; 5] = [Self::P3, Self::P15, Self::P50, Self::P85, Self::P97];

    /// Percentile the band represents
    #[must_use]
    pub const fn percentile(self) -> f64 {
        match self {
            Self::P3 => 3.0,
            Self::P15 => 15.0,
            Self::P50 => 50.0,
            Self::P85 => 85.0,
            Self::P97 => 97.0,
        }
    }
}

impl fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.percentile())
    }
}

/// LMS parameters and percentile curves for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Age in whole months
    pub month: u32,
    /// Box-Cox power (skewness)
    #[serde(rename = "L")]
    pub l: f64,
    /// Median
    #[serde(rename = "M")]
    pub m: f64,
    /// Coefficient of variation
    #[serde(rename = "S")]
    pub s: f64,
    /// 3rd percentile value
    #[serde(rename = "P3")]
    pub p3: f64,
    /// 15th percentile value
    #[serde(rename = "P15")]
    pub p15: f64,
    /// 50th percentile value
    #[serde(rename = "P50")]
    pub p50: f64,
    /// 85th percentile value
    #[serde(rename = "P85")]
    pub p85: f64,
    /// 97th percentile value
    #[serde(rename = "P97")]
    pub p97: f64,
}

impl ReferenceRow {
    /// Value of a named curve at this month
    #[must_use]
    pub const fn band(&self, band: PercentileBand) -> f64 {
        match band {
            PercentileBand::P3 => self.p3,
            PercentileBand::P15 => self.p15,
            PercentileBand::P50 => self.p50,
            PercentileBand::P85 => self.p85,
            PercentileBand::P97 => self.p97,
        }
    }

    /// Percentile of a measured value against this row
    #[must_use]
    pub fn percentile_of(&self, value: f64) -> Option<f64> {
        lms::percentile(value, self.l, self.m, self.s)
    }
}

/// Rows for the three metrics of one sex
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTables {
    /// Weight-for-age rows
    #[serde(default)]
    pub weight: Vec<ReferenceRow>,
    /// Length-for-age rows
    #[serde(default)]
    pub length: Vec<ReferenceRow>,
    /// Head circumference-for-age rows
    #[serde(default, rename = "headCirc")]
    pub head_circumference: Vec<ReferenceRow>,
}

impl MetricTables {
    /// Rows for one metric
    #[must_use]
    pub fn rows(&self, metric: Metric) -> &[ReferenceRow] {
        match metric {
            Metric::Weight => &self.weight,
            Metric::Length => &self.length,
            Metric::HeadCircumference => &self.head_circumference,
        }
    }

    /// Mutable rows for one metric
    pub fn rows_mut(&mut self, metric: Metric) -> &mut Vec<ReferenceRow> {
        match metric {
            Metric::Weight => &mut self.weight,
            Metric::Length => &mut self.length,
            Metric::HeadCircumference => &mut self.head_circumference,
        }
    }
}

/// Immutable WHO growth standard dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Boys' tables
    #[serde(default)]
    pub boys: MetricTables,
    /// Girls' tables
    #[serde(default)]
    pub girls: MetricTables,
}

impl ReferenceTable {
    /// Tables for one sex
    #[must_use]
    pub const fn tables(&self, sex: Sex) -> &MetricTables {
        match sex {
            Sex::Male => &self.boys,
            Sex::Female => &self.girls,
        }
    }

    /// Rows for a sex/metric combination
    #[must_use]
    pub fn rows(&self, sex: Sex, metric: Metric) -> &[ReferenceRow] {
        self.tables(sex).rows(metric)
    }

    /// Add a row, mainly for building tables in code
    pub fn insert(&mut self, sex: Sex, metric: Metric, row: ReferenceRow) {
        let tables = match sex {
            Sex::Male => &mut self.boys,
            Sex::Female => &mut self.girls,
        };
        tables.rows_mut(metric).push(row);
    }

    /// Row for the month nearest to `age_months`
    #[must_use]
    pub fn lookup(&self, sex: Sex, metric: Metric, age_months: f64) -> Option<&ReferenceRow> {
        let month = nearest_month(age_months)?;
        self.rows(sex, metric).iter().find(|row| row.month == month)
    }

    /// Total number of rows across all tables
    #[must_use]
    pub fn row_count(&self) -> usize {
        [Sex::Male, Sex::Female]
            .into_iter()
            .flat_map(|sex| Metric::ALL.into_iter().map(move |metric| (sex, metric)))
            .map(|(sex, metric)| self.rows(sex, metric).len())
            .sum()
    }
}

/// Round to the nearest whole month, halves rounding up
///
/// Returns `None` for ages that cannot be a table month.
#[must_use]
pub fn nearest_month(age_months: f64) -> Option<u32> {
    let rounded = (age_months + 0.5).floor();
    if rounded.is_finite() && rounded >= 0.0 && rounded <= f64::from(u32::MAX) {
        Some(rounded as u32)
    } else {
        None
    }
}
