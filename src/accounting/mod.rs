//! Hour accounting for the shift board.
//!
//! This module contains the pure functions that turn a month of shift
//! assignments into per-person contractual and extra hour totals, weekly
//! over/under/exact classifications, and day/night occupancy counts.
//! Nothing here performs I/O or holds state.

mod hours;
mod occupancy;
mod roster;
mod staff_stats;

pub use hours::{
    MAX_WEEKLY_HOURS, MONTHLY_TARGET_WEEKS, compute_monthly_target, hours_for_assignments,
};
pub use occupancy::{compute_month_occupancy, compute_occupancy, daily_roster};
pub use roster::{ALL_ROLES, RoleFilter, available_roles, filter_roster};
pub use staff_stats::compute_staff_stats;
