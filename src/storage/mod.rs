//! Storage layer for Eclosion
//!
//! JSON file storage with atomic writes for Stash goals and the imported
//! recurring snapshot.

pub mod file_io;
pub mod recurring;
pub mod stash;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use recurring::{read_snapshot, RecurringRepository};
pub use stash::StashRepository;

use crate::config::paths::EclosionPaths;
use crate::error::EclosionError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub stash: StashRepository,
    pub recurring: RecurringRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: &EclosionPaths) -> Result<Self, EclosionError> {
        paths.ensure_directories()?;

        Ok(Self {
            stash: StashRepository::new(paths.stash_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
        })
    }

    /// Load goal data from disk
    pub fn load_all(&mut self) -> Result<(), EclosionError> {
        self.stash.load()
    }
}
