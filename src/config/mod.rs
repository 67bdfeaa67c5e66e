//! Configuration for the growth tracker.

use std::fmt;
use std::path::PathBuf;

/// Percentile and divergence thresholds that trigger alerts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// Percentiles below this are critical
    pub low_percentile: f64,
    /// Percentiles above this need caution
    pub high_percentile: f64,
    /// Weight gap (percent of the heavier twin) that needs caution
    pub divergence_caution: f64,
    /// Weight gap that is critical
    pub divergence_critical: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_percentile: 3.0,
            high_percentile: 97.0,
            divergence_caution: 10.0,
            divergence_critical: 20.0,
        }
    }
}

/// Configuration for the growth tracker
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    /// Correct ages for prematurity using each subject's due date
    pub use_corrected_age: bool,
    /// Alert thresholds
    pub thresholds: AlertThresholds,
    /// Subject profiles and measurement records
    pub data_file: PathBuf,
    /// WHO growth standard dataset
    pub reference_file: PathBuf,
    /// Buffered store events per subscriber before older ones are dropped
    pub event_capacity: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            use_corrected_age: false,
            thresholds: AlertThresholds::default(),
            data_file: PathBuf::from("data/records.json"),
            reference_file: PathBuf::from("data/who-standards.json"),
            event_capacity: 64,
        }
    }
}

impl fmt::Display for GrowthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Growth Curve Configuration:")?;
        writeln!(f, "  Corrected Age: {}", self.use_corrected_age)?;
        writeln!(
            f,
            "  Percentile Alerts: <{} / >{}",
            self.thresholds.low_percentile, self.thresholds.high_percentile
        )?;
        writeln!(
            f,
            "  Twin Weight Gap Alerts: {}% / {}%",
            self.thresholds.divergence_caution, self.thresholds.divergence_critical
        )?;
        writeln!(f, "  Data File: {}", self.data_file.display())?;
        writeln!(f, "  Reference File: {}", self.reference_file.display())?;
        Ok(())
    }
}
