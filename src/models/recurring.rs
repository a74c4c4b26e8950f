//! Recurring expense items and rollups
//!
//! These records mirror what the backend reports for each dedicated recurring
//! category: its current (catch-up) monthly target and the steady-state rate
//! it settles to once a full billing cycle has been saved.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A recurring expense with its own billing cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    /// Billing cycle length in months; below 1 means billed more than monthly
    pub frequency_months: f64,
    /// Monthly amount being set aside right now
    pub frozen_monthly_target: Money,
    /// Monthly amount once the buffer for a full cycle is built
    pub ideal_monthly_rate: Money,
    /// Months until the next billing date
    #[serde(default)]
    pub months_until_due: u32,
}

fn default_enabled() -> bool {
    true
}

impl RecurringItem {
    pub fn new(
        id: impl Into<String>,
        frequency_months: f64,
        frozen_monthly_target: Money,
        ideal_monthly_rate: Money,
        months_until_due: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            is_enabled: true,
            frequency_months,
            frozen_monthly_target,
            ideal_monthly_rate,
            months_until_due,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// True when the current target is above the steady-state rate
    ///
    /// Compared in whole units so cent-level rounding is not read as catch-up.
    pub fn is_catching_up(&self) -> bool {
        self.frozen_monthly_target.round_to_units() > self.ideal_monthly_rate.round_to_units()
    }

    /// Billed more often than once a month
    pub fn is_sub_monthly(&self) -> bool {
        self.frequency_months < 1.0
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Backend-aggregated bucket of small recurring items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupSummary {
    #[serde(default)]
    pub enabled: bool,
    pub frozen_monthly_target: Money,
    #[serde(alias = "total_ideal_rate")]
    pub ideal_monthly_rate: Money,
    /// Months until the slowest member of the rollup normalizes
    #[serde(default)]
    pub months_until_stable: u32,
}

impl RollupSummary {
    pub fn new(frozen_monthly_target: Money, ideal_monthly_rate: Money) -> Self {
        Self {
            enabled: true,
            frozen_monthly_target,
            ideal_monthly_rate,
            months_until_stable: 0,
        }
    }

    pub fn with_months_until_stable(mut self, months: u32) -> Self {
        self.months_until_stable = months;
        self
    }
}

/// The recurring state of a budget as exported by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringSnapshot {
    #[serde(default)]
    pub items: Vec<RecurringItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup: Option<RollupSummary>,
}

impl RecurringSnapshot {
    /// Check that every item has a usable billing frequency
    pub fn validate(&self) -> Result<(), String> {
        for item in &self.items {
            if !item.frequency_months.is_finite() || item.frequency_months <= 0.0 {
                return Err(format!(
                    "Item '{}' has invalid frequency_months: {}",
                    item.display_name(),
                    item.frequency_months
                ));
            }
        }
        Ok(())
    }
}
