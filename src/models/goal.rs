//! Stash savings goal model
//!
//! A Stash goal is a one-off savings target: an amount to reach, optionally
//! by a date, with a running balance and this month's budgeted contribution.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// Unique identifier for a Stash goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StashGoalId(uuid::Uuid);

impl StashGoalId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix("stash-").unwrap_or(s);
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for StashGoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StashGoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stash-{}", &self.0.to_string()[..8])
    }
}

/// A savings goal tracked in the Stash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StashGoal {
    pub id: StashGoalId,
    pub name: String,
    pub target_amount: Money,
    #[serde(default)]
    pub current_balance: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Amount set aside toward this goal during `budgeted_month`
    #[serde(default)]
    pub budgeted_this_month: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budgeted_month: Option<MonthKey>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StashGoal {
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: StashGoalId::new(),
            name: name.into(),
            target_amount,
            current_balance: Money::zero(),
            target_date: None,
            budgeted_this_month: Money::zero(),
            budgeted_month: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.current_balance = balance;
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Amount still needed to reach the target, never negative
    pub fn shortfall(&self) -> Money {
        (self.target_amount - self.current_balance).non_negative()
    }

    pub fn is_funded(&self) -> bool {
        self.shortfall().is_zero()
    }

    /// Record a contribution made during `month`
    ///
    /// Contributions from an earlier month are already part of the balance
    /// and stop counting as budgeted once a new month starts.
    pub fn contribute(&mut self, amount: Money, month: MonthKey) {
        if self.budgeted_month != Some(month) {
            self.budgeted_this_month = Money::zero();
            self.budgeted_month = Some(month);
        }
        self.current_balance += amount;
        self.budgeted_this_month += amount;
        self.updated_at = Utc::now();
    }

    /// Amount budgeted during `month`, zero for any other month
    pub fn budgeted_in(&self, month: MonthKey) -> Money {
        if self.budgeted_month == Some(month) {
            self.budgeted_this_month
        } else {
            Money::zero()
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for StashGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target_date {
            Some(date) => write!(
                f,
                "{} ({} by {})",
                self.name,
                self.target_amount,
                date.format("%Y-%m-%d")
            ),
            None => write!(f, "{} ({})", self.name, self.target_amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NegativeAmount => write!(f, "Goal amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
