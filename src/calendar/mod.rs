//! Calendar partitioning for the shift board.
//!
//! This module turns a `(year, month)` pair into its ordered days and groups
//! those days into Sunday-to-Saturday week buckets. Everything here is pure
//! and allocation-only.

mod month;
mod week;

pub use month::{
    checked_month_bounds, days_on_weekdays, enumerate_month_days, month_bounds, shift_month, weekday_from_sunday_index,
};
pub use week::{WEEK_CLOSING_DAY, WeekBucket, group_by_week};
