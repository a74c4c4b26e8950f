//! Stash goal CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_list};
use crate::error::{EclosionError, EclosionResult};
use crate::models::{MonthKey, StashGoal};
use crate::services::{calculate_goal_progress, parse_local_date, project_completion_month};
use crate::storage::Storage;

use super::target::parse_amount;

/// Stash subcommands
#[derive(Subcommand)]
pub enum StashCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g., "1200" or "1200.00")
        amount: String,
        /// Starting balance
        #[arg(short, long)]
        balance: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all goals with this month's targets
    List,

    /// Show details for a goal
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Record a contribution made this month
    Fund {
        /// Goal name or ID
        goal: String,
        /// Amount contributed
        amount: String,
    },

    /// Delete a goal
    Remove {
        /// Goal name or ID
        goal: String,
    },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn find_goal(storage: &Storage, identifier: &str) -> EclosionResult<StashGoal> {
    storage
        .stash
        .find(identifier)?
        .ok_or_else(|| EclosionError::goal_not_found(identifier))
}

/// Handle a stash command
pub fn handle_stash_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StashCommands,
) -> EclosionResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        StashCommands::Add {
            name,
            amount,
            balance,
            date,
        } => {
            if storage.stash.find(&name)?.is_some() {
                return Err(EclosionError::duplicate_goal(&name));
            }

            let mut goal = StashGoal::new(name.trim(), parse_amount("goal amount", &amount)?);
            if let Some(balance) = balance {
                goal = goal.with_balance(parse_amount("balance", &balance)?);
            }
            if let Some(date) = date {
                goal = goal.with_target_date(parse_local_date(&date)?);
            }
            goal.validate()
                .map_err(|e| EclosionError::Validation(e.to_string()))?;

            storage.stash.upsert(goal.clone())?;
            storage.stash.save()?;
            info!(goal = %goal.id, "created stash goal");

            let progress = calculate_goal_progress(&goal, today());
            println!("Added {}", goal);
            println!("  This month: {}", progress.monthly_target.format_units(symbol));
        }

        StashCommands::List => {
            let today = today();
            let rows: Vec<_> = storage
                .stash
                .list()?
                .into_iter()
                .map(|goal| {
                    let progress = calculate_goal_progress(&goal, today);
                    (goal, progress)
                })
                .collect();

            print!("{}", format_goal_list(&rows, symbol, &settings.date_format));
        }

        StashCommands::Show { goal } => {
            let goal = find_goal(storage, &goal)?;
            let progress = calculate_goal_progress(&goal, today());
            print!(
                "{}",
                format_goal_details(&goal, &progress, symbol, &settings.date_format)
            );

            if !progress.shortfall.is_zero() && !progress.monthly_target.is_zero() {
                if let Some(done) = project_completion_month(
                    progress.shortfall,
                    progress.monthly_target,
                    MonthKey::from_date(today()),
                ) {
                    println!("  Funded by:    {} at this pace", done.long_label());
                }
            }
        }

        StashCommands::Fund { goal, amount } => {
            let mut goal = find_goal(storage, &goal)?;
            let amount = parse_amount("amount", &amount)?;
            goal.contribute(amount, MonthKey::from_date(today()));

            storage.stash.upsert(goal.clone())?;
            storage.stash.save()?;

            let progress = calculate_goal_progress(&goal, today());
            println!(
                "Funded '{}' with {}. Balance: {} ({})",
                goal.name,
                amount.format_with_symbol(symbol),
                goal.current_balance.format_with_symbol(symbol),
                progress.status
            );
        }

        StashCommands::Remove { goal } => {
            let goal = find_goal(storage, &goal)?;
            storage.stash.delete(goal.id)?;
            storage.stash.save()?;
            println!("Removed '{}'.", goal.name);
        }
    }

    Ok(())
}
