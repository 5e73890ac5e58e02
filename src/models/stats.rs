//! Derived statistics models.
//!
//! This module contains the result types produced by the accounting engine:
//! per-person monthly and weekly hour breakdowns and day/night occupancy.
//! None of these are persisted; they are recomputed on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShiftSlot;

/// How a week's contractual hours compare to the weekly contract.
///
/// Exactly one status holds for any week.
///
/// # Example
///
/// ```
/// use shift_board::models::WeekStatus;
///
/// assert_eq!(WeekStatus::classify(42, 36), WeekStatus::Over);
/// assert_eq!(WeekStatus::classify(36, 36), WeekStatus::Exact);
/// assert_eq!(WeekStatus::classify(30, 36), WeekStatus::Under);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    /// More contractual hours than contracted.
    Over,
    /// Fewer contractual hours than contracted.
    Under,
    /// Exactly the contracted hours.
    Exact,
}

impl WeekStatus {
    /// Classifies `contractual_hours` against `weekly_contracted_hours`.
    pub fn classify(contractual_hours: u32, weekly_contracted_hours: u32) -> Self {
        if contractual_hours > weekly_contracted_hours {
            WeekStatus::Over
        } else if contractual_hours < weekly_contracted_hours {
            WeekStatus::Under
        } else {
            WeekStatus::Exact
        }
    }
}

/// Hour breakdown for one week bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStats {
    /// 1-based position of the week within the month.
    pub week_index: usize,
    /// First day of the bucket.
    pub start: NaiveDate,
    /// Last day of the bucket (inclusive).
    pub end: NaiveDate,
    /// Hours counted against the contract.
    pub contractual_hours: u32,
    /// Supplemental hours.
    pub extra_hours: u32,
    /// Classification of `contractual_hours`.
    pub status: WeekStatus,
}

impl WeekStats {
    /// Returns true if the week is above the contracted hours.
    pub fn is_over_limit(&self) -> bool {
        self.status == WeekStatus::Over
    }

    /// Returns true if the week is below the contracted hours.
    pub fn is_under_limit(&self) -> bool {
        self.status == WeekStatus::Under
    }

    /// Returns true if the week matches the contracted hours exactly.
    pub fn is_exact(&self) -> bool {
        self.status == WeekStatus::Exact
    }
}

/// Monthly hour accounting for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffStats {
    /// The staff member these figures belong to.
    pub staff_id: Uuid,
    /// Weekly contract times four.
    pub monthly_target: u32,
    /// Hours from non-extra assignments.
    pub total_contractual_hours: u32,
    /// Hours from extra assignments.
    pub total_extra_hours: u32,
    /// `monthly_target - total_contractual_hours`; negative means overage.
    pub remaining_monthly: i64,
    /// One entry per week bucket, in bucket order.
    pub weekly: Vec<WeekStats>,
}

impl StaffStats {
    /// Returns true if the member has worked past the monthly target.
    pub fn is_monthly_over(&self) -> bool {
        self.remaining_monthly < 0
    }
}

/// Distinct staff present in each half of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOccupancy {
    /// The date counted.
    pub date: NaiveDate,
    /// Distinct staff on `07-13` or `13-19`.
    pub day_count: usize,
    /// Distinct staff on `19-00` or `00-07`.
    pub night_count: usize,
}

/// Occupancy for every day of a month, with chart scale maxima.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyChart {
    /// One entry per day of the month.
    pub days: Vec<DailyOccupancy>,
    /// Largest `day_count`, never below 1.
    pub max_day: usize,
    /// Largest `night_count`, never below 1.
    pub max_night: usize,
}

/// One person on the drill-down list for a date and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The staff member.
    pub staff_id: Uuid,
    /// Display name.
    pub full_name: String,
    /// Joined role name, if any.
    pub role_name: Option<String>,
    /// Hours this person covers inside the period.
    pub hours: u32,
    /// Whether any of those slots is extra.
    pub is_extra: bool,
    /// The slots worked inside the period.
    pub slots: Vec<ShiftSlot>,
}

/// Everyone working a given date and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRoster {
    /// The date listed.
    pub date: NaiveDate,
    /// Entries sorted by hours, largest first.
    pub entries: Vec<RosterEntry>,
    /// Sum of entry hours.
    pub total_hours: u32,
}

impl DailyRoster {
    /// Number of people on the list.
    pub fn staff_count(&self) -> usize {
        self.entries.len()
    }
}
