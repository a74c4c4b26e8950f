//! One-off target calculation commands
//!
//! `target` and `months` work on their arguments alone and never touch
//! stored data.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{EclosionError, EclosionResult};
use crate::models::{Money, MonthKey};
use crate::services::{calculate_monthly_target, months_between, parse_local_date};

/// Parse a money argument into a validation error on failure
pub(crate) fn parse_amount(label: &str, value: &str) -> EclosionResult<Money> {
    Money::parse(value)
        .map_err(|e| EclosionError::Validation(format!("Invalid {}: {}", label, e)))
}

/// Parse an optional `YYYY-MM` argument into the first day of that month
pub(crate) fn parse_month_arg(month: Option<&str>) -> EclosionResult<Option<NaiveDate>> {
    month
        .map(|m| {
            MonthKey::parse(m)
                .map(|key| key.first_day())
                .map_err(|e| EclosionError::Validation(e.to_string()))
        })
        .transpose()
}

/// Print the amount to set aside this month for a goal
pub fn handle_target_command(
    settings: &Settings,
    goal: &str,
    balance: &str,
    date: &str,
    month: Option<&str>,
) -> EclosionResult<()> {
    let goal = parse_amount("goal amount", goal)?;
    let balance = parse_amount("balance", balance)?;
    if goal.is_negative() {
        return Err(EclosionError::Validation(
            "Goal amount cannot be negative".to_string(),
        ));
    }

    let target_date = parse_local_date(date)?;
    let current_month = parse_month_arg(month)?;

    let monthly = calculate_monthly_target(goal, balance, target_date, current_month);
    let symbol = &settings.currency_symbol;

    println!("{}/mo", monthly.format_units(symbol));
    if monthly.is_zero() {
        println!("  Goal is fully funded.");
    } else {
        println!(
            "  {} remaining by {}",
            (goal - balance).format_with_symbol(symbol),
            target_date.format(&settings.date_format)
        );
    }

    Ok(())
}

/// Print the whole-month difference between two dates
pub fn handle_months_command(from: &str, to: &str) -> EclosionResult<()> {
    let from = parse_local_date(from)?;
    let to = parse_local_date(to)?;
    println!("{}", months_between(from, to));
    Ok(())
}
