//! Monthly target calculator
//!
//! Works out how much to set aside this month so a goal is met by its target
//! date. The remaining shortfall is spread evenly over the months left,
//! counting the current one, and rounded to whole currency units. Rounding
//! rather than taking the ceiling keeps the schedule honest: whatever is
//! under-collected this month raises next month's shortfall.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::money::CENTS_PER_UNIT;
use crate::models::{GoalProgress, GoalStatus, Money, MonthKey, StashGoal};

use super::dates::{month_start, months_between};

/// Amount to allocate this month toward `target_amount` by `target_date`
///
/// Returns a whole-unit amount. Any outstanding need reports at least one
/// unit; a goal that is already funded reports zero.
pub fn calculate_monthly_target(
    target_amount: Money,
    current_balance: Money,
    target_date: NaiveDate,
    current_month: Option<NaiveDate>,
) -> Money {
    let shortfall = (target_amount - current_balance).non_negative();
    if shortfall.is_zero() {
        return Money::zero();
    }

    let current_month_start =
        month_start(current_month.unwrap_or_else(|| Local::now().date_naive()));
    let months_remaining = months_between(current_month_start, month_start(target_date));

    let target = if months_remaining == 0 {
        // Due this month (or overdue)
        round_share(shortfall, 1)
    } else {
        round_share(shortfall, u64::from(months_remaining) + 1)
    };

    debug!(
        shortfall = shortfall.cents(),
        months_remaining,
        target = target.cents(),
        "calculated monthly target"
    );

    target
}

/// `shortfall / months` rounded half-up to whole units, at least one unit
fn round_share(shortfall: Money, months: u64) -> Money {
    let cents = i128::from(shortfall.cents());
    let months = i128::from(months.max(1));
    let unit = i128::from(CENTS_PER_UNIT);

    // round(c / (unit * m)) == floor((2c + unit * m) / (2 * unit * m)) for c >= 0
    let units = (2 * cents + unit * months) / (2 * unit * months);
    let units = if units == 0 && cents > 0 { 1 } else { units };

    Money::from_units(i64::try_from(units).unwrap_or(i64::MAX / CENTS_PER_UNIT))
}

/// Steady-state monthly rate for an expense billed every `frequency_months`
///
/// Rounded to the cent. A non-positive frequency cannot be spread and yields
/// the full amount.
pub fn calculate_ideal_monthly_rate(amount: Money, frequency_months: f64) -> Money {
    if !frequency_months.is_finite() || frequency_months <= 0.0 {
        return amount;
    }
    Money::from_cents((amount.cents() as f64 / frequency_months).round() as i64)
}

/// Progress of a Stash goal for the month containing `current_month`
///
/// The monthly target is taken against the balance as it stood at the start
/// of the month, so contributions made this month count toward the status
/// instead of lowering the target. Contributions recorded in earlier months
/// are part of that opening balance.
pub fn calculate_goal_progress(goal: &StashGoal, current_month: NaiveDate) -> GoalProgress {
    let shortfall = goal.shortfall();
    let budgeted = goal.budgeted_in(MonthKey::from_date(current_month));
    let opening_balance = goal.current_balance - budgeted;

    let monthly_target = match goal.target_date {
        Some(date) => calculate_monthly_target(
            goal.target_amount,
            opening_balance,
            date,
            Some(current_month),
        ),
        None => Money::zero(),
    };

    let status = if shortfall.is_zero() {
        GoalStatus::Funded
    } else if monthly_target.is_zero() {
        GoalStatus::OnTrack
    } else if budgeted > monthly_target {
        GoalStatus::Ahead
    } else if budgeted == monthly_target {
        GoalStatus::OnTrack
    } else {
        GoalStatus::Behind
    };

    GoalProgress {
        shortfall,
        monthly_target,
        budgeted,
        progress_percent: progress_percent(goal.target_amount, goal.current_balance),
        status,
    }
}

fn progress_percent(target: Money, balance: Money) -> u8 {
    if !target.is_positive() {
        return 100;
    }
    let funded = i128::from(balance.non_negative().cents()) * 100 / i128::from(target.cents());
    funded.min(100) as u8
}

/// Month in which a constant contribution covers `shortfall`
///
/// The first contribution lands in `current_month`. Returns `None` when
/// there is a shortfall but nothing is being contributed, or when the
/// completion month lies beyond the representable calendar.
pub fn project_completion_month(
    shortfall: Money,
    monthly_contribution: Money,
    current_month: MonthKey,
) -> Option<MonthKey> {
    if !shortfall.is_positive() {
        return Some(current_month);
    }
    if !monthly_contribution.is_positive() {
        return None;
    }

    // ceil(shortfall / contribution) - 1, without overflowing near i64::MAX
    let offset = (shortfall.cents() - 1) / monthly_contribution.cents();
    let offset = u32::try_from(offset).ok()?;
    current_month.checked_add_months(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn now() -> Option<NaiveDate> {
        Some(date(2025, 1, 15))
    }

    #[test]
    fn test_funded_goal_needs_nothing() {
        let target = date(2025, 12, 1);
        let zero = Money::zero();
        assert_eq!(calculate_monthly_target(units(500), units(500), target, now()), zero);
        assert_eq!(calculate_monthly_target(units(500), units(900), target, now()), zero);
        assert_eq!(calculate_monthly_target(zero, zero, target, now()), zero);
    }

    #[test]
    fn test_twelve_months_out_spreads_over_thirteen() {
        let target = calculate_monthly_target(units(1200), Money::zero(), date(2026, 1, 10), now());
        assert_eq!(target, units(92));
    }

    #[test]
    fn test_due_this_month_is_not_spread() {
        let target = calculate_monthly_target(units(250), units(0), date(2025, 1, 31), now());
        assert_eq!(target, units(250));

        let cents = calculate_monthly_target(
            Money::from_cents(25_060),
            Money::zero(),
            date(2025, 1, 2),
            now(),
        );
        assert_eq!(cents, units(251));
    }

    #[test]
    fn test_overdue_target_is_due_now() {
        let target = calculate_monthly_target(units(300), units(100), date(2024, 6, 1), now());
        assert_eq!(target, units(200));
    }

    #[test]
    fn test_two_months_out_spreads_over_three() {
        let target = calculate_monthly_target(units(300), Money::zero(), date(2025, 3, 1), now());
        assert_eq!(target, units(100));
    }

    #[test]
    fn test_negative_balance_increases_need() {
        let target = calculate_monthly_target(units(100), units(-50), date(2025, 2, 1), now());
        assert_eq!(target, units(75));
    }

    #[test]
    fn test_rounds_half_up() {
        // 150 / 4 = 37.5
        let target = calculate_monthly_target(units(150), Money::zero(), date(2025, 4, 1), now());
        assert_eq!(target, units(38));
        // 100 / 3 = 33.33
        let target = calculate_monthly_target(units(100), Money::zero(), date(2025, 3, 1), now());
        assert_eq!(target, units(33));
    }

    #[test]
    fn test_floor_of_one_unit() {
        for cents in [1, 25, 49] {
            for months_out in [0, 1, 6, 36] {
                let target_date = MonthKey::from_date(date(2025, 1, 1))
                    .add_months(months_out)
                    .first_day();
                let target = calculate_monthly_target(
                    Money::from_cents(cents),
                    Money::zero(),
                    target_date,
                    now(),
                );
                assert_eq!(target, units(1), "cents={} months_out={}", cents, months_out);
            }
        }
    }

    #[test]
    fn test_non_increasing_as_horizon_grows() {
        let mut previous = None;
        for months_out in 0..48 {
            let target_date = MonthKey::from_date(date(2025, 1, 1))
                .add_months(months_out)
                .first_day();
            let target = calculate_monthly_target(units(1000), units(37), target_date, now());
            if let Some(prev) = previous {
                assert!(target <= prev, "months_out={}", months_out);
            }
            previous = Some(target);
        }
    }

    #[test]
    fn test_ideal_monthly_rate() {
        assert_eq!(calculate_ideal_monthly_rate(units(120), 12.0), units(10));
        assert_eq!(calculate_ideal_monthly_rate(units(100), 3.0), Money::from_cents(3333));
        assert_eq!(calculate_ideal_monthly_rate(units(10), 0.5), units(20));
        assert_eq!(calculate_ideal_monthly_rate(units(10), 0.0), units(10));
    }

    #[test]
    fn test_goal_progress_statuses() {
        let today = date(2025, 1, 20);
        let base = StashGoal::new("Trip", units(1200)).with_target_date(date(2026, 1, 1));

        let progress = calculate_goal_progress(&base, today);
        assert_eq!(progress.monthly_target, units(92));
        assert_eq!(progress.status, GoalStatus::Behind);
        assert_eq!(progress.progress_percent, 0);

        let jan = MonthKey::from_date(today);
        let mut ahead = base.clone();
        ahead.contribute(units(150), jan);
        let progress = calculate_goal_progress(&ahead, today);
        assert_eq!(progress.monthly_target, units(92));
        assert_eq!(progress.budgeted, units(150));
        assert_eq!(progress.status, GoalStatus::Ahead);
        assert_eq!(progress.progress_percent, 12);

        let mut on_track = base.clone();
        on_track.contribute(units(92), jan);
        assert_eq!(calculate_goal_progress(&on_track, today).status, GoalStatus::OnTrack);

        let funded = base.clone().with_balance(units(1300));
        let progress = calculate_goal_progress(&funded, today);
        assert_eq!(progress.status, GoalStatus::Funded);
        assert_eq!(progress.progress_percent, 100);
    }

    #[test]
    fn test_earlier_contributions_roll_into_opening_balance() {
        let mut goal = StashGoal::new("Trip", units(1200)).with_target_date(date(2026, 1, 1));
        goal.contribute(units(200), MonthKey::new(2025, 1).unwrap());

        let january = calculate_goal_progress(&goal, date(2025, 1, 20));
        assert_eq!(january.monthly_target, units(92));
        assert_eq!(january.status, GoalStatus::Ahead);

        // 1000 left over June..January
        let june = calculate_goal_progress(&goal, date(2025, 6, 3));
        assert_eq!(june.monthly_target, units(125));
        assert_eq!(june.budgeted, Money::zero());
        assert_eq!(june.status, GoalStatus::Behind);
    }

    #[test]
    fn test_goal_without_date_has_no_monthly_target() {
        let goal = StashGoal::new("Someday", units(500)).with_balance(units(125));
        let progress = calculate_goal_progress(&goal, date(2025, 1, 1));
        assert_eq!(progress.monthly_target, Money::zero());
        assert_eq!(progress.status, GoalStatus::OnTrack);
        assert_eq!(progress.progress_percent, 25);
    }

    #[test]
    fn test_project_completion_month() {
        let jan = MonthKey::new(2025, 1).unwrap();

        let march = MonthKey::new(2025, 3).ok();
        let april = MonthKey::new(2025, 4).ok();

        assert_eq!(project_completion_month(units(300), units(100), jan), march);
        assert_eq!(project_completion_month(units(301), units(100), jan), april);
        assert_eq!(project_completion_month(units(50), units(100), jan), Some(jan));
        assert_eq!(project_completion_month(Money::zero(), Money::zero(), jan), Some(jan));
        assert_eq!(project_completion_month(units(10), Money::zero(), jan), None);
    }

    #[test]
    fn test_completion_beyond_calendar_is_none() {
        let jan = MonthKey::new(2025, 1).unwrap();
        let one_cent = Money::from_cents(1);

        assert_eq!(project_completion_month(Money::from_cents(i64::MAX), one_cent, jan), None);
        assert_eq!(project_completion_month(units(1_000_000), one_cent, jan), None);
        assert_eq!(
            project_completion_month(Money::from_cents(i64::MAX), Money::from_cents(i64::MAX), jan),
            Some(jan)
        );
    }
}
