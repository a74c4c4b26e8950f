//! Result records produced by the target calculator and projector

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// One future month on a stabilization timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineMonthPoint {
    pub month: MonthKey,
    /// Abbreviated month name, e.g. "Jan"
    pub month_label: String,
    pub year: String,
    /// Set on the first point that lands in a new calendar year
    pub show_year: bool,
    /// Projected total monthly contribution, whole units
    pub amount: Money,
}

/// Where the aggregate recurring contribution is headed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilizationResult {
    pub current_monthly_cost: Money,
    pub stable_monthly_rate: Money,
    pub has_catch_up: bool,
    pub months_until_stable: u32,
    pub stabilization_month: Option<MonthKey>,
    /// Human-readable stabilization month, e.g. "March 2027"
    pub stabilization_date: Option<String>,
    pub timeline: Vec<TimelineMonthPoint>,
}

impl StabilizationResult {
    /// A result where nothing is catching up
    pub fn stable(current_monthly_cost: Money, stable_monthly_rate: Money) -> Self {
        Self {
            current_monthly_cost,
            stable_monthly_rate,
            has_catch_up: false,
            months_until_stable: 0,
            stabilization_month: None,
            stabilization_date: None,
            timeline: Vec::new(),
        }
    }

    /// How much the monthly contribution drops once stable
    pub fn monthly_savings_when_stable(&self) -> Money {
        (self.current_monthly_cost - self.stable_monthly_rate).non_negative()
    }
}

/// Funding status of a savings goal for the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Funded,
    Ahead,
    OnTrack,
    Behind,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Funded => "Funded",
            Self::Ahead => "Ahead",
            Self::OnTrack => "On track",
            Self::Behind => "Behind",
        };
        write!(f, "{}", label)
    }
}

/// Progress snapshot of a savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub shortfall: Money,
    pub monthly_target: Money,
    /// Contributed during the month the progress was taken for
    pub budgeted: Money,
    /// Whole percent of the target covered by the balance, 0..=100
    pub progress_percent: u8,
    pub status: GoalStatus,
}
