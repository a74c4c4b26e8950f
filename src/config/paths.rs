//! Path management for Eclosion
//!
//! ## Path Resolution Order
//!
//! 1. `ECLOSION_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/eclosion` or `~/.config/eclosion`
//! 3. Windows: `%APPDATA%\eclosion`

use std::path::PathBuf;

use crate::error::EclosionError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ECLOSION_DATA_DIR";

/// Manages all paths used by Eclosion
#[derive(Debug, Clone)]
pub struct EclosionPaths {
    base_dir: PathBuf,
}

impl EclosionPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, EclosionError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to stash.json (savings goals)
    pub fn stash_file(&self) -> PathBuf {
        self.data_dir().join("stash.json")
    }

    /// Get the path to recurring.json (imported recurring snapshot)
    pub fn recurring_file(&self) -> PathBuf {
        self.data_dir().join("recurring.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EclosionError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EclosionError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EclosionError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Eclosion has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EclosionError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                EclosionError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("eclosion"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EclosionError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EclosionError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("eclosion"))
}
