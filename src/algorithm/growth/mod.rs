//! Growth percentile engine
//!
//! Turns a subject's measurements into positions on the WHO growth
//! standards. Data flows leaf-first:
//!
//! 1. [`age`] converts birth and measurement dates into (corrected) months
//! 2. [`reference`] snaps that age to a table month and returns its LMS row
//! 3. [`lms`] converts a value and an LMS row into a percentile
//! 4. [`alerts`] classifies the percentiles and the twins' weight gap
//!
//! Everything here is a pure function of the snapshot and the reference
//! table, so evaluations can run concurrently without coordination.

pub mod age;
pub mod alerts;
pub mod lms;
pub mod reference;
pub mod series;
pub mod status;

// Re-export commonly used items
pub use age::{DAYS_PER_MONTH, age_in_months};
pub use alerts::{Alert, AlertEvaluator, AlertKind, evaluate_alerts};
pub use lms::{normal_cdf, percentile, z_score};
pub use reference::{PercentileBand, ReferenceRow, ReferenceTable};
pub use series::{BandSeries, GrowthPoint, growth_points, reference_bands};
pub use status::{MetricStatus, PercentileClass, SubjectStatus, WeightGap, subject_status, weight_gap};
