//! Core data models for Eclosion
//!
//! This module contains the value records the savings engine works over:
//! money, calendar months, Stash goals, recurring items and the projections
//! computed from them.

pub mod goal;
pub mod money;
pub mod month;
pub mod projection;
pub mod recurring;

pub use goal::{GoalValidationError, StashGoal, StashGoalId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use projection::{GoalProgress, GoalStatus, StabilizationResult, TimelineMonthPoint};
pub use recurring::{RecurringItem, RecurringSnapshot, RollupSummary};
