//! Point-in-time view of all user data
//!
//! A snapshot bundles both subject profiles with every measurement record.
//! The percentile engine only ever reads a snapshot; hosts mutate their own
//! copy and pass the new state into the next evaluation. `SnapshotRef`
//! gives the same read access over borrowed parts.

use serde::{Deserialize, Serialize};

use crate::models::measurement::{MeasurementRecord, latest_record};
use crate::models::subject::{Subject, Subjects};
use crate::models::types::SubjectId;

/// Subjects plus their records, as stored in the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The two subject profiles
    #[serde(rename = "babies")]
    pub subjects: Subjects,
    /// All records in insertion order
    #[serde(default)]
    pub records: Vec<MeasurementRecord>,
}

impl Snapshot {
    /// Create a snapshot from parts
    #[must_use]
    pub const fn new(subjects: Subjects, records: Vec<MeasurementRecord>) -> Self {
        Self { subjects, records }
    }

    /// Borrowed view of this snapshot
    #[must_use]
    pub fn view(&self) -> SnapshotRef<'_> {
        SnapshotRef::new(&self.subjects, &self.records)
    }

    /// Profile for a slot
    #[must_use]
    pub const fn subject(&self, id: SubjectId) -> &Subject {
        self.subjects.get(id)
    }

    /// Most recent record for a subject
    #[must_use]
    pub fn latest(&self, id: SubjectId) -> Option<&MeasurementRecord> {
        self.view().latest(id)
    }

    /// Records for a subject, in insertion order
    pub fn records_for(&self, id: SubjectId) -> impl Iterator<Item = &MeasurementRecord> {
        self.view().records_for(id)
    }
}

/// Subjects and records borrowed from wherever the host keeps them
#[derive(Debug, Clone, Copy)]
pub struct SnapshotRef<'a> {
    /// The two subject profiles
    pub subjects: &'a Subjects,
    /// All records in insertion order
    pub records: &'a [MeasurementRecord],
}

impl<'a> SnapshotRef<'a> {
    /// View over separately held parts
    #[must_use]
    pub const fn new(subjects: &'a Subjects, records: &'a [MeasurementRecord]) -> Self {
        Self { subjects, records }
    }

    /// Profile for a slot
    #[must_use]
    pub const fn subject(self, id: SubjectId) -> &'a Subject {
        self.subjects.get(id)
    }

    /// Most recent record for a subject
    #[must_use]
    pub fn latest(self, id: SubjectId) -> Option<&'a MeasurementRecord> {
        latest_record(self.records, id)
    }

    /// Records for a subject, in insertion order
    pub fn records_for(self, id: SubjectId) -> impl Iterator<Item = &'a MeasurementRecord> {
        self.records.iter().filter(move |record| record.subject == id)
    }
}

impl<'a> From<&'a Snapshot> for SnapshotRef<'a> {
    fn from(snapshot: &'a Snapshot) -> Self {
        snapshot.view()
    }
}
