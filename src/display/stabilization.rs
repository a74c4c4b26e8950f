//! Recurring stabilization display formatting

use crate::models::{StabilizationResult, TimelineMonthPoint};

/// Format the stabilization summary, with the timeline when requested
pub fn format_stabilization(
    result: &StabilizationResult,
    symbol: &str,
    show_timeline: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Current monthly cost: {}\n",
        result.current_monthly_cost.format_units(symbol)
    ));
    output.push_str(&format!(
        "Stable monthly rate:  {}\n",
        result.stable_monthly_rate.format_units(symbol)
    ));

    if !result.has_catch_up {
        output.push_str("\nAll recurring expenses are at their steady-state rate.\n");
        return output;
    }

    output.push_str(&format!(
        "\nCatching up: stable in {} month(s)",
        result.months_until_stable
    ));
    if let Some(date) = &result.stabilization_date {
        output.push_str(&format!(" ({})", date));
    }
    output.push('\n');
    output.push_str(&format!(
        "Monthly contribution drops by {} once stable.\n",
        result.monthly_savings_when_stable().format_units(symbol)
    ));

    if show_timeline && !result.timeline.is_empty() {
        output.push('\n');
        output.push_str(&format_timeline(&result.timeline, symbol));
    }

    output
}

/// Format timeline points, one month per line
pub fn format_timeline(points: &[TimelineMonthPoint], symbol: &str) -> String {
    let mut output = String::new();

    for point in points {
        let year = if point.show_year {
            format!(" {}", point.year)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "  {:<9} {:>10}\n",
            format!("{}{}", point.month_label, year),
            point.amount.format_units(symbol)
        ));
    }

    output
}
