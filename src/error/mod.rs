//! Error handling for the growth tracker.
//!
//! The percentile engine itself never fails; missing data is expressed as
//! `None`. Errors only arise at the host boundary: reading and writing the
//! data files, validating new measurements, and mutating the record store.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::types::Metric;

/// Specialized error type for the growth tracker
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// Error opening, reading or writing a file
    #[error("IO error: {context}{}", path_suffix(.path))]
    Io {
        /// What was being attempted
        context: String,
        /// File involved, if known
        path: Option<PathBuf>,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// Malformed JSON in a data file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Subject slot that does not exist
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    /// Measurement record that does not exist
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    /// A measurement carried none of weight, length or head circumference
    #[error("Measurement must contain at least one of weight, length or head circumference")]
    EmptyMeasurement,

    /// A measurement value that is not a usable positive number
    #[error("Invalid {metric} value: {value}")]
    InvalidMeasurement {
        /// Metric the value was given for
        metric: Metric,
        /// Rejected value
        value: f64,
    },

    /// Date string that could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl GrowthError {
    /// Wrap an I/O error with a description of the failed operation
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: None,
            source,
        }
    }

    /// Attach the file path to an I/O error
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Io {
                context, source, ..
            } => Self::Io {
                context,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

/// Result type for growth tracker operations
pub type Result<T> = std::result::Result<T, GrowthError>;
