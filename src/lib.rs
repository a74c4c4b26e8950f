//! Eclosion - savings target engine for recurring expenses and Stash goals
//!
//! This library holds the calculations shared by Eclosion's recurring
//! budgeting and Stash surfaces: how much to set aside this month for a goal,
//! and when the aggregate recurring contribution settles to its steady state.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, calendar months, goals, recurring items, projections
//! - `services`: Date arithmetic, monthly targets, stabilization projection
//! - `storage`: JSON file storage for goals and recurring snapshots
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `eclosion` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use eclosion::models::Money;
//! use eclosion::services::calculate_monthly_target;
//!
//! let monthly = calculate_monthly_target(
//!     Money::from_units(1200),
//!     Money::zero(),
//!     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 1),
//! );
//! assert_eq!(monthly, Money::from_units(92));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{EclosionError, EclosionResult};
