//! Configuration module for Eclosion
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EclosionPaths;
pub use settings::Settings;
