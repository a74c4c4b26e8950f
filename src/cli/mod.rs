//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service and storage layers.

pub mod recurring;
pub mod stash;
pub mod target;

pub use recurring::{handle_recurring_command, RecurringCommands};
pub use stash::{handle_stash_command, StashCommands};
pub use target::{handle_months_command, handle_target_command};
