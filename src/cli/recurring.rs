//! Recurring expense CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_stabilization;
use crate::error::{EclosionError, EclosionResult};
use crate::models::MonthKey;
use crate::services::calculate_stabilization_point;
use crate::storage::{read_snapshot, Storage};

/// Recurring subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Import a recurring snapshot exported from the backend
    Import {
        /// Path to the snapshot JSON file
        file: PathBuf,
    },

    /// Project when the monthly recurring contribution stabilizes
    Stabilize {
        /// Month to project from (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Read this snapshot instead of the imported one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> EclosionResult<()> {
    match cmd {
        RecurringCommands::Import { file } => {
            let snapshot = storage.recurring.import(&file)?;
            let enabled = snapshot.items.iter().filter(|i| i.is_enabled).count();
            let catching_up = snapshot
                .items
                .iter()
                .filter(|i| i.is_enabled && i.is_catching_up())
                .count();
            println!(
                "Imported {} recurring item(s) ({} enabled, {} catching up){}.",
                snapshot.items.len(),
                enabled,
                catching_up,
                if snapshot.rollup.is_some() {
                    " and a rollup"
                } else {
                    ""
                }
            );
        }

        RecurringCommands::Stabilize { month, file } => {
            let current_month = match month {
                Some(m) => {
                    MonthKey::parse(&m).map_err(|e| EclosionError::Validation(e.to_string()))?
                }
                None => MonthKey::current(),
            };

            let snapshot = match file {
                Some(path) => read_snapshot(&path)?,
                None => storage.recurring.load()?,
            };

            let result = calculate_stabilization_point(
                &snapshot.items,
                snapshot.rollup.as_ref(),
                current_month,
            );

            print!(
                "{}",
                format_stabilization(&result, &settings.currency_symbol, settings.show_timeline)
            );
        }
    }

    Ok(())
}
