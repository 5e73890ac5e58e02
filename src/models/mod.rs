//! Core data models for the shift board.
//!
//! This module contains the domain models shared by the calendar, accounting,
//! store and API layers.

mod shift;
mod staff;
mod stats;

pub use shift::{HOURS_PER_SLOT, Period, ShiftAssignment, ShiftSlot};
pub use staff::{Role, StaffMember, Vehicle};
pub use stats::{
    DailyOccupancy, DailyRoster, OccupancyChart, RosterEntry, StaffStats, WeekStats, WeekStatus,
};
