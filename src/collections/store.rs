//! Record store
//!
//! Holds the current snapshot for a host and applies mutations to it. The
//! percentile engine never sees the store itself, only `snapshot()`.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use log::{info, warn};
use serde::Deserialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::collections::events::{EventBus, StoreEvent};
use crate::error::{GrowthError, Result};
use crate::loader::{load_snapshot, save_snapshot};
use crate::models::date::parse_date;
use crate::models::measurement::{MeasurementInput, MeasurementRecord, MeasurementSet};
use crate::models::snapshot::Snapshot;
use crate::models::subject::{Subject, SubjectPatch};
use crate::models::types::SubjectId;

/// Note attached to records pulled in from the companion twin log
pub const IMPORT_NOTE: &str = "imported from twin-log";

/// Measurement exported by the companion twin log
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportedMeasurement {
    /// Subject slot
    #[serde(rename = "baby")]
    pub subject: SubjectId,
    /// Measurement day as exported; see `parse_date` for accepted formats
    pub date: String,
    /// Raw values
    #[serde(flatten)]
    pub values: MeasurementInput,
}

/// Mutable holder of subjects and records
#[derive(Debug, Default)]
pub struct GrowthStore {
    snapshot: Snapshot,
    events: EventBus,
}

impl GrowthStore {
    /// Wrap an existing snapshot
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            events: EventBus::default(),
        }
    }

    /// Use a bus with a specific capacity
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.events = EventBus::new(capacity);
        self
    }

    /// Load from a data file, or start with placeholders if it is missing
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(load_snapshot(path)?))
    }

    /// Write the current state to a data file
    pub fn save(&self, path: &Path) -> Result<()> {
        save_snapshot(path, &self.snapshot)?;
        info!(
            "Saved {} records to {}",
            self.snapshot.records.len(),
            path.display()
        );
        Ok(())
    }

    /// Current state, for evaluation
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Subscribe to change notifications
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Record by identifier
    #[must_use]
    pub fn record(&self, id: Uuid) -> Option<&MeasurementRecord> {
        self.snapshot.records.iter().find(|record| record.id == id)
    }

    /// Apply a partial update to a subject profile
    pub fn update_subject(&mut self, id: SubjectId, patch: SubjectPatch) -> &Subject {
        self.snapshot.subjects.get_mut(id).apply(patch);
        info!("Updated subject {id}");

        self.events
            .publish(StoreEvent::SubjectsUpdated(self.snapshot.subjects.clone()));
        self.snapshot.subject(id)
    }

    /// Store a new record
    pub fn add_record(
        &mut self,
        subject: SubjectId,
        date: NaiveDate,
        values: MeasurementSet,
        note: impl Into<String>,
    ) -> &MeasurementRecord {
        let record = MeasurementRecord::new(subject, date, values, note);
        info!("Added record {} for subject {subject} on {date}", record.id);

        self.events.publish(StoreEvent::RecordAdded(record.clone()));
        self.snapshot.records.push(record);
        &self.snapshot.records[self.snapshot.records.len() - 1]
    }

    /// Replace a record's values
    ///
    /// All three values are overwritten. The note is only replaced by a
    /// non-empty one.
    pub fn amend_record(
        &mut self,
        id: Uuid,
        values: MeasurementSet,
        note: Option<String>,
    ) -> Result<&MeasurementRecord> {
        let index = self.position(id)?;
        let record = &mut self.snapshot.records[index];

        record.values = values;
        if let Some(note) = note.filter(|n| !n.is_empty()) {
            record.note = note;
        }
        info!("Amended record {id}");

        self.events.publish(StoreEvent::RecordUpdated(record.clone()));
        Ok(&self.snapshot.records[index])
    }

    /// Delete a record
    pub fn remove_record(&mut self, id: Uuid) -> Result<MeasurementRecord> {
        let index = self.position(id)?;
        let record = self.snapshot.records.remove(index);
        info!("Removed record {id}");

        self.events.publish(StoreEvent::RecordRemoved(id));
        Ok(record)
    }

    /// Import measurements, skipping days already recorded for a subject
    ///
    /// Returns the number of records added.
    pub fn import_records<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = ImportedMeasurement>,
    {
        let mut seen: HashSet<(SubjectId, NaiveDate)> = self
            .snapshot
            .records
            .iter()
            .map(|record| (record.subject, record.date))
            .collect();

        let mut imported = 0;
        for entry in entries {
            let date = match parse_date(&entry.date) {
                Ok(date) => date,
                Err(e) => {
                    warn!("Skipping import for subject {}: {e}", entry.subject);
                    continue;
                }
            };
            if !seen.insert((entry.subject, date)) {
                continue;
            }
            match MeasurementSet::try_from(entry.values) {
                Ok(values) => {
                    self.snapshot.records.push(MeasurementRecord::new(
                        entry.subject,
                        date,
                        values,
                        IMPORT_NOTE,
                    ));
                    imported += 1;
                }
                Err(e) => warn!(
                    "Skipping import for subject {} on {date}: {e}",
                    entry.subject
                ),
            }
        }

        info!("Imported {imported} records");
        self.events.publish(StoreEvent::Refreshed);
        imported
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.snapshot
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(GrowthError::RecordNotFound(id))
    }
}
