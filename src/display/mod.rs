//! Display formatting for terminal output

pub mod goal;
pub mod stabilization;

pub use goal::{format_goal_details, format_goal_list};
pub use stabilization::{format_stabilization, format_timeline};
