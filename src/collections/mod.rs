//! Host-side data holding
//!
//! The record store keeps the current subjects and records for a host,
//! validates and applies mutations, and publishes change events. The
//! percentile engine reads the resulting snapshot and holds no state itself.

pub mod events;
pub mod store;

// Re-export for convenience
pub use events::{EventBus, StoreEvent};
pub use store::{GrowthStore, IMPORT_NOTE, ImportedMeasurement};
