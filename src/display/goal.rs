//! Stash goal display formatting

use chrono::NaiveDate;

use crate::models::{GoalProgress, StashGoal};

/// Format goals as a table with this month's target and status
pub fn format_goal_list(
    goals: &[(StashGoal, GoalProgress)],
    symbol: &str,
    date_format: &str,
) -> String {
    if goals.is_empty() {
        return "No Stash goals yet.\n\nUse 'eclosion stash add <name> <amount>' to create one."
            .to_string();
    }

    let name_width = goals
        .iter()
        .map(|(g, _)| g.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>10}  {:>5}  {:<10}  {}\n",
        "Goal",
        "Target",
        "Balance",
        "This month",
        "Done",
        "By",
        "Status",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->10}  {:->5}  {:-<10}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (goal, progress) in goals {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>10}  {:>4}%  {:<10}  {}\n",
            goal.name,
            goal.target_amount.format_with_symbol(symbol),
            goal.current_balance.format_with_symbol(symbol),
            progress.monthly_target.format_units(symbol),
            progress.progress_percent,
            format_optional_date(goal.target_date, date_format),
            progress.status,
            width = name_width
        ));
    }

    output
}

/// Format the details of a single goal
pub fn format_goal_details(
    goal: &StashGoal,
    progress: &GoalProgress,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Stash goal: {}\n", goal.name));
    output.push_str(&format!("  ID:           {}\n", goal.id));
    output.push_str(&format!(
        "  Target:       {}\n",
        goal.target_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:      {}\n",
        goal.current_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:    {}\n",
        progress.shortfall.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Target date:  {}\n",
        format_optional_date(goal.target_date, date_format)
    ));
    output.push_str(&format!(
        "  This month:   {} needed, {} budgeted\n",
        progress.monthly_target.format_units(symbol),
        progress.budgeted.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Progress:     {}%\n", progress.progress_percent));
    output.push_str(&format!("  Status:       {}\n", progress.status));

    output
}

fn format_optional_date(date: Option<NaiveDate>, date_format: &str) -> String {
    date.map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalStatus, Money};

    fn progress() -> GoalProgress {
        GoalProgress {
            shortfall: Money::from_units(1100),
            monthly_target: Money::from_units(92),
            budgeted: Money::from_units(15),
            progress_percent: 8,
            status: GoalStatus::Behind,
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(format_goal_list(&[], "$", "%Y-%m-%d").contains("No Stash goals"));
    }

    #[test]
    fn test_list_row() {
        let goal = StashGoal::new("Trip", Money::from_units(1200))
            .with_balance(Money::from_units(100))
            .with_target_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let output = format_goal_list(&[(goal, progress())], "$", "%Y-%m-%d");

        assert!(output.contains("Trip"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains("$92"));
        assert!(output.contains("2026-01-01"));
        assert!(output.contains("Behind"));
    }

    #[test]
    fn test_details_without_date() {
        let goal = StashGoal::new("Rainy day", Money::from_units(1200));
        let output = format_goal_details(&goal, &progress(), "€", "%d/%m/%Y");

        assert!(output.contains("Stash goal: Rainy day"));
        assert!(output.contains("Target date:  -"));
        assert!(output.contains("€92 needed, €15.00 budgeted"));
    }
}
