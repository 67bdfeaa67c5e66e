//! Common domain type definitions
//!
//! This module contains the small enums shared across the models, the
//! percentile engine and the record store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex, selecting the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    /// Boys' reference table
    #[default]
    #[serde(rename = "boy", alias = "male")]
    Male,
    /// Girls' reference table
    #[serde(rename = "girl", alias = "female")]
    Female,
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "f" | "female" | "girl" | "2" => Self::Female,
            "m" | "male" | "boy" | "1" => Self::Male,
            other => {
                log::warn!("Unknown sex '{other}', falling back to the boys' table");
                Self::Male
            }
        }
    }
}

/// Anthropometric measurement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Weight-for-age, kilograms
    #[serde(rename = "weight")]
    Weight,
    /// Length-for-age, centimetres
    #[serde(rename = "length")]
    Length,
    /// Head circumference-for-age, centimetres
    #[serde(rename = "headCirc")]
    HeadCircumference,
}

impl Metric {
    /// Fixed evaluation order for alerts and status summaries
    pub const ALL: [Self; 3] = [Self::Weight, Self::Length, Self::HeadCircumference];

    /// Human-readable label used in rendered messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Length => "length",
            Self::HeadCircumference => "head circumference",
        }
    }

    /// Unit the metric is recorded in
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Length | Self::HeadCircumference => "cm",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the two fixed subject slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectId {
    /// First twin
    #[serde(rename = "a")]
    A,
    /// Second twin
    #[serde(rename = "b")]
    B,
}

impl SubjectId {
    /// Both slots in fixed evaluation order
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Short key used in the data file
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

impl std::str::FromStr for SubjectId {
    type Err = crate::error::GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            other => Err(crate::error::GrowthError::SubjectNotFound(other.to_string())),
        }
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Alert severity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, e.g. missing profile data
    Info = 1,
    /// Worth watching
    Caution = 2,
    /// Needs prompt attention
    Critical = 3,
}

impl Severity {
    /// Get a descriptive name for this severity level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Caution => "Caution",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Which subjects the host is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// A single twin
    Subject(SubjectId),
    /// Both twins side by side
    Compare,
}

impl View {
    /// Subjects covered by this view, in fixed order
    #[must_use]
    pub fn subjects(self) -> Vec<SubjectId> {
        match self {
            Self::Subject(id) => vec![id],
            Self::Compare => SubjectId::ALL.to_vec(),
        }
    }
}
