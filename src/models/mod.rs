//! Domain models for the growth tracker
//!
//! This module contains the subject profiles, measurement records and the
//! snapshot type that bundles them for evaluation.

pub mod date;
pub mod measurement;
pub mod snapshot;
pub mod subject;
pub mod types;

// Re-export commonly used types
pub use date::parse_date;
pub use measurement::{MeasurementInput, MeasurementRecord, MeasurementSet};
pub use snapshot::{Snapshot, SnapshotRef};
pub use subject::{Subject, SubjectPatch, Subjects};
pub use types::{Metric, Severity, Sex, SubjectId, View};
