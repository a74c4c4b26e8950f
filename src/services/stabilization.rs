//! Stabilization projector
//!
//! Recurring items that have not yet saved a full billing cycle carry an
//! elevated "catch-up" monthly target. Each one drops to its steady-state
//! rate once its next bill passes. This module sums the current and
//! steady-state rates across enabled items (and the rollup, as a single
//! entry), finds the month the slowest item normalizes, and lays out the
//! month-by-month glide path down to the steady-state total.

use tracing::debug;

use crate::models::{
    Money, MonthKey, RecurringItem, RollupSummary, StabilizationResult, TimelineMonthPoint,
};

/// Rates of one participant in the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateEntry {
    pub current: Money,
    pub ideal: Money,
    /// Month offset from now at which this entry pays its ideal rate
    pub horizon: u32,
}

impl RateEntry {
    /// Rate this entry contributes `offset` months from now
    pub fn rate_at(&self, offset: u32) -> Money {
        if offset >= self.horizon {
            self.ideal
        } else {
            self.current
        }
    }

    pub fn is_catching_up(&self) -> bool {
        self.current.round_to_units() > self.ideal.round_to_units()
    }
}

/// Normalization horizon of a single item, in months
///
/// Items billed monthly or less often settle once their next bill passes,
/// and no sooner than next month. Sub-monthly items rebuild their buffer
/// within a cycle, so they settle by next month. Items already at their
/// ideal rate are settled.
pub fn item_horizon(item: &RecurringItem) -> u32 {
    if at_ideal_rate(item.frozen_monthly_target, item.ideal_monthly_rate) {
        0
    } else if item.is_sub_monthly() {
        1
    } else {
        item.months_until_due.max(1)
    }
}

fn at_ideal_rate(current: Money, ideal: Money) -> bool {
    current.round_to_units() == ideal.round_to_units()
}

/// Enabled items plus the enabled rollup, as rate entries
pub fn collect_entries(items: &[RecurringItem], rollup: Option<&RollupSummary>) -> Vec<RateEntry> {
    let mut entries: Vec<RateEntry> = items
        .iter()
        .filter(|item| item.is_enabled)
        .map(|item| RateEntry {
            current: item.frozen_monthly_target,
            ideal: item.ideal_monthly_rate,
            horizon: item_horizon(item),
        })
        .collect();

    if let Some(rollup) = rollup.filter(|r| r.enabled) {
        let horizon = if at_ideal_rate(rollup.frozen_monthly_target, rollup.ideal_monthly_rate) {
            0
        } else {
            rollup.months_until_stable.max(1)
        };
        entries.push(RateEntry {
            current: rollup.frozen_monthly_target,
            ideal: rollup.ideal_monthly_rate,
            horizon,
        });
    }

    entries
}

/// Project when the aggregate monthly contribution reaches its steady state
///
/// `current_month` anchors the timeline; the first point is the month after.
pub fn calculate_stabilization_point(
    items: &[RecurringItem],
    rollup: Option<&RollupSummary>,
    current_month: MonthKey,
) -> StabilizationResult {
    let entries = collect_entries(items, rollup);

    let current_monthly_cost: Money = entries.iter().map(|e| e.current).sum();
    let stable_monthly_rate: Money = entries.iter().map(|e| e.ideal).sum();

    let has_catch_up = current_monthly_cost > stable_monthly_rate.round_to_units()
        && entries.iter().any(RateEntry::is_catching_up);

    if !has_catch_up {
        debug!(
            entries = entries.len(),
            current = current_monthly_cost.cents(),
            "no recurring catch-up in progress"
        );
        return StabilizationResult::stable(current_monthly_cost, stable_monthly_rate);
    }

    // The aggregate is stable only once the slowest entry has normalized
    let months_until_stable = entries
        .iter()
        .filter(|e| e.is_catching_up())
        .map(|e| e.horizon)
        .max()
        .unwrap_or(0);

    let timeline = calculate_burndown_data(&entries, current_month, months_until_stable);
    let stabilization_month = current_month.add_months(months_until_stable);

    debug!(
        entries = entries.len(),
        current = current_monthly_cost.cents(),
        stable = stable_monthly_rate.cents(),
        months_until_stable,
        "projected recurring stabilization"
    );

    StabilizationResult {
        current_monthly_cost,
        stable_monthly_rate,
        has_catch_up,
        months_until_stable,
        stabilization_month: Some(stabilization_month),
        stabilization_date: Some(stabilization_month.long_label()),
        timeline,
    }
}

/// Projected total contribution for each of the next `months` months
///
/// Amounts are whole units, kept between the steady-state total and
/// today's total. `show_year` marks the first point of each new calendar
/// year relative to the point before it (or `current_month` for the first
/// point).
pub fn calculate_burndown_data(
    entries: &[RateEntry],
    current_month: MonthKey,
    months: u32,
) -> Vec<TimelineMonthPoint> {
    let current: Money = entries.iter().map(|e| e.current).sum();
    let stable: Money = entries.iter().map(|e| e.ideal).sum();
    let (floor, ceiling) = (current.min(stable), current.max(stable));
    let mut previous_year = current_month.year();

    (1..=months)
        .map(|offset| {
            let month = current_month.add_months(offset);
            let amount: Money = entries.iter().map(|e| e.rate_at(offset)).sum();
            let amount = amount.clamp(floor, ceiling);
            let show_year = month.year() != previous_year;
            previous_year = month.year();

            TimelineMonthPoint {
                month,
                month_label: month.short_label().to_string(),
                year: month.year().to_string(),
                show_year,
                amount: amount.round_to_units(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn month(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    fn item(id: &str, current: i64, ideal: i64, frequency: f64, due_in: u32) -> RecurringItem {
        RecurringItem::new(id, frequency, units(current), units(ideal), due_in)
    }

    #[test]
    fn test_empty_input() {
        let result = calculate_stabilization_point(&[], None, month(2025, 1));
        assert_eq!(result.current_monthly_cost, Money::zero());
        assert_eq!(result.stable_monthly_rate, Money::zero());
        assert!(!result.has_catch_up);
        assert_eq!(result.months_until_stable, 0);
        assert!(result.timeline.is_empty());
        assert!(result.stabilization_date.is_none());
    }

    #[test]
    fn test_disabled_rollup_is_ignored() {
        let mut rollup = RollupSummary::new(units(90), units(30)).with_months_until_stable(5);
        rollup.enabled = false;

        let result = calculate_stabilization_point(&[], Some(&rollup), month(2025, 1));
        assert_eq!(result.current_monthly_cost, Money::zero());
        assert!(!result.has_catch_up);
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_all_items_at_ideal_rate() {
        let items = vec![
            item("a", 60, 60, 12.0, 4),
            RecurringItem::new("b", 3.0, units(34), Money::from_cents(3333), 2),
        ];
        let result = calculate_stabilization_point(&items, None, month(2025, 1));
        assert!(!result.has_catch_up);
        assert_eq!(result.months_until_stable, 0);
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_two_item_scenario() {
        let items = vec![item("a", 100, 60, 12.0, 7), item("b", 20, 20, 1.0, 0)];
        let result = calculate_stabilization_point(&items, None, month(2025, 3));

        assert_eq!(result.current_monthly_cost, units(120));
        assert_eq!(result.stable_monthly_rate, units(80));
        assert!(result.has_catch_up);
        assert_eq!(result.months_until_stable, 7);
        assert_eq!(result.timeline.len(), 7);
        assert_eq!(result.stabilization_month, Some(month(2025, 10)));
        assert_eq!(result.stabilization_date.as_deref(), Some("October 2025"));

        let amounts: Vec<Money> = result.timeline.iter().map(|p| p.amount).collect();
        assert!(amounts.iter().all(|a| *a >= units(80) && *a <= units(120)));
        assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(amounts.last(), Some(&units(80)));
    }

    #[test]
    fn test_slowest_item_sets_horizon() {
        let items = vec![
            item("quarterly", 50, 30, 3.0, 2),
            item("annual", 40, 10, 12.0, 9),
            item("semiannual", 25, 15, 6.0, 5),
        ];
        let result = calculate_stabilization_point(&items, None, month(2025, 1));

        assert_eq!(result.months_until_stable, 9);
        let amounts: Vec<i64> = result.timeline.iter().map(|p| p.amount.units()).collect();
        assert_eq!(amounts, vec![115, 95, 95, 95, 85, 85, 85, 85, 55]);
    }

    #[test]
    fn test_disabled_items_do_not_participate() {
        let items = vec![
            item("on", 50, 50, 1.0, 0),
            item("off", 500, 10, 12.0, 11).disabled(),
        ];
        let result = calculate_stabilization_point(&items, None, month(2025, 1));
        assert_eq!(result.current_monthly_cost, units(50));
        assert!(!result.has_catch_up);
    }

    #[test]
    fn test_rollup_contributes_as_single_entry() {
        let items = vec![item("a", 30, 30, 1.0, 0)];
        let rollup = RollupSummary::new(units(70), units(40)).with_months_until_stable(3);
        let result = calculate_stabilization_point(&items, Some(&rollup), month(2025, 1));

        assert_eq!(result.current_monthly_cost, units(100));
        assert_eq!(result.stable_monthly_rate, units(70));
        assert_eq!(result.months_until_stable, 3);
        let amounts: Vec<i64> = result.timeline.iter().map(|p| p.amount.units()).collect();
        assert_eq!(amounts, vec![100, 100, 70]);
    }

    #[test]
    fn test_sub_monthly_item_settles_next_month() {
        let weekly = item("groceries", 450, 433, 0.25, 0);
        assert_eq!(item_horizon(&weekly), 1);

        let result = calculate_stabilization_point(&[weekly], None, month(2025, 1));
        assert!(result.has_catch_up);
        assert_eq!(result.months_until_stable, 1);
        assert_eq!(result.timeline.len(), 1);
        assert_eq!(result.timeline[0].amount, units(433));
    }

    #[test]
    fn test_item_due_now_settles_next_month() {
        let items = vec![item("a", 100, 60, 12.0, 0)];
        let result = calculate_stabilization_point(&items, None, month(2025, 3));

        assert!(result.has_catch_up);
        assert_eq!(result.months_until_stable, 1);
        assert_eq!(result.stabilization_date.as_deref(), Some("April 2025"));
        assert_eq!(result.timeline.len(), 1);
        assert_eq!(result.timeline[0].amount, units(60));
    }

    #[test]
    fn test_rollup_without_horizon_settles_next_month() {
        let rollup = RollupSummary::new(units(70), units(40));
        let result = calculate_stabilization_point(&[], Some(&rollup), month(2025, 3));

        assert!(result.has_catch_up);
        assert_eq!(result.months_until_stable, 1);
        assert_eq!(result.stabilization_month, Some(month(2025, 4)));
        assert_eq!(result.timeline.len(), 1);
        assert_eq!(result.timeline[0].amount, units(40));
    }

    #[test]
    fn test_underfunded_item_stays_within_bounds() {
        let items = vec![item("a", 100, 60, 12.0, 7), item("b", 10, 20, 6.0, 5)];
        let result = calculate_stabilization_point(&items, None, month(2025, 3));

        assert_eq!(result.current_monthly_cost, units(110));
        assert_eq!(result.stable_monthly_rate, units(80));
        assert_eq!(result.months_until_stable, 7);

        let amounts: Vec<i64> = result.timeline.iter().map(|p| p.amount.units()).collect();
        assert_eq!(amounts, vec![110, 110, 110, 110, 110, 110, 80]);
    }

    #[test]
    fn test_underfunded_item_does_not_dip_below_stable() {
        let items = vec![item("a", 100, 60, 12.0, 1), item("b", 10, 20, 6.0, 3)];
        let result = calculate_stabilization_point(&items, None, month(2025, 3));

        assert_eq!(result.months_until_stable, 1);
        assert_eq!(result.timeline[0].amount, units(80));
    }

    #[test]
    fn test_year_boundary_flagged_once() {
        let items = vec![item("a", 100, 50, 12.0, 4)];
        let result = calculate_stabilization_point(&items, None, month(2025, 11));

        let labels: Vec<&str> = result.timeline.iter().map(|p| p.month_label.as_str()).collect();
        assert_eq!(labels, vec!["Dec", "Jan", "Feb", "Mar"]);

        let flagged: Vec<&TimelineMonthPoint> =
            result.timeline.iter().filter(|p| p.show_year).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].month_label, "Jan");
        assert_eq!(flagged[0].year, "2026");
    }

    #[test]
    fn test_burndown_rounds_amounts() {
        let entries = [
            RateEntry {
                current: Money::from_cents(10_040),
                ideal: Money::from_cents(5_060),
                horizon: 2,
            },
            RateEntry {
                current: Money::from_cents(1_000),
                ideal: Money::from_cents(1_000),
                horizon: 0,
            },
        ];
        let points = calculate_burndown_data(&entries, month(2025, 6), 2);
        assert_eq!(points[0].amount, units(110));
        assert_eq!(points[1].amount, units(61));
        assert!(points.iter().all(|p| !p.show_year));
    }
}
