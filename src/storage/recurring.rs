//! Recurring snapshot storage
//!
//! The backend's recurring state is imported as a single JSON document and
//! replaced wholesale on each import.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::EclosionError;
use crate::models::RecurringSnapshot;

use super::file_io::{read_json, read_json_required, write_json_atomic};

pub struct RecurringRepository {
    path: PathBuf,
}

impl RecurringRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored snapshot, empty if none has been imported
    pub fn load(&self) -> Result<RecurringSnapshot, EclosionError> {
        read_json(&self.path)
    }

    pub fn save(&self, snapshot: &RecurringSnapshot) -> Result<(), EclosionError> {
        write_json_atomic(&self.path, snapshot)
    }

    /// Read and validate a snapshot from `source`, then store it
    pub fn import(&self, source: &Path) -> Result<RecurringSnapshot, EclosionError> {
        let snapshot = read_snapshot(source)?;
        self.save(&snapshot)?;
        info!(
            items = snapshot.items.len(),
            rollup = snapshot.rollup.is_some(),
            "imported recurring snapshot"
        );
        Ok(snapshot)
    }
}

/// Read and validate a snapshot file outside the data directory
pub fn read_snapshot(source: &Path) -> Result<RecurringSnapshot, EclosionError> {
    let snapshot: RecurringSnapshot = read_json_required(source)?;
    snapshot.validate().map_err(EclosionError::Validation)?;
    Ok(snapshot)
}
