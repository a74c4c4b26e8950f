//! Business logic layer for Eclosion
//!
//! Pure calculations over the models: calendar arithmetic, monthly targets
//! and the recurring stabilization projection.

pub mod dates;
pub mod stabilization;
pub mod target;

pub use dates::{
    format_local_date, get_month_start, month_start, months_between, months_between_iso,
    parse_local_date,
};
pub use stabilization::{
    calculate_burndown_data, calculate_stabilization_point, collect_entries, item_horizon,
    RateEntry,
};
pub use target::{
    calculate_goal_progress, calculate_ideal_monthly_rate, calculate_monthly_target,
    project_completion_month,
};
