//! Growth percentile tracking for twins against the WHO growth standards.
//!
//! The core turns (birth date, measurement date, value) into a corrected age
//! and an LMS percentile, and derives advisory alerts from the results. The
//! record store, file loading and change events form a thin host layer
//! around it.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::{AlertThresholds, GrowthConfig};
pub use error::{GrowthError, Result};
pub use models::{
    MeasurementInput, MeasurementRecord, MeasurementSet, Metric, Severity, Sex, Snapshot,
    SnapshotRef, Subject, SubjectId, SubjectPatch, Subjects, View, parse_date,
};

// Percentile engine
pub use algorithm::growth::{
    Alert, AlertEvaluator, AlertKind, ReferenceRow, ReferenceTable, age_in_months,
    evaluate_alerts, percentile,
};

// Host layer
pub use collections::{GrowthStore, StoreEvent};
pub use loader::{load_reference_table, load_snapshot, save_snapshot};
