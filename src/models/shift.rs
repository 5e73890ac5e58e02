//! Shift slot and assignment models.
//!
//! This module defines the four fixed 6-hour [`ShiftSlot`]s, the day/night
//! [`Period`] they fall into, and the [`ShiftAssignment`] row that places a
//! staff member in a slot on a given date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of hours covered by every slot.
pub const HOURS_PER_SLOT: u32 = 6;

/// One of the four fixed 6-hour windows of a day.
///
/// The set is closed; the four slots evenly partition 24 hours.
///
/// # Example
///
/// ```
/// use shift_board::models::{Period, ShiftSlot};
///
/// assert_eq!(ShiftSlot::Morning.label(), "07-13");
/// assert_eq!(ShiftSlot::Dawn.period(), Period::Night);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftSlot {
    /// 07:00 to 13:00.
    #[serde(rename = "07-13")]
    Morning,
    /// 13:00 to 19:00.
    #[serde(rename = "13-19")]
    Afternoon,
    /// 19:00 to midnight.
    #[serde(rename = "19-00")]
    Evening,
    /// Midnight to 07:00.
    #[serde(rename = "00-07")]
    Dawn,
}

impl ShiftSlot {
    /// All slots in board order.
    pub const ALL: [ShiftSlot; 4] = [
        ShiftSlot::Morning,
        ShiftSlot::Afternoon,
        ShiftSlot::Evening,
        ShiftSlot::Dawn,
    ];

    /// Returns the wire label of the slot (e.g., `"07-13"`).
    pub fn label(&self) -> &'static str {
        match self {
            ShiftSlot::Morning => "07-13",
            ShiftSlot::Afternoon => "13-19",
            ShiftSlot::Evening => "19-00",
            ShiftSlot::Dawn => "00-07",
        }
    }

    /// Returns the half of the day this slot belongs to.
    pub fn period(&self) -> Period {
        match self {
            ShiftSlot::Morning | ShiftSlot::Afternoon => Period::Day,
            ShiftSlot::Evening | ShiftSlot::Dawn => Period::Night,
        }
    }
}

impl std::fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Daytime or nighttime half of a date, used for occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// 07:00 to 19:00 (`07-13`, `13-19`).
    Day,
    /// 19:00 to 07:00 (`19-00`, `00-07`).
    Night,
}

impl Period {
    /// Returns the slots that make up this period.
    pub fn slots(&self) -> [ShiftSlot; 2] {
        match self {
            Period::Day => [ShiftSlot::Morning, ShiftSlot::Afternoon],
            Period::Night => [ShiftSlot::Evening, ShiftSlot::Dawn],
        }
    }

    /// Returns true if `slot` falls inside this period.
    pub fn contains(&self, slot: ShiftSlot) -> bool {
        slot.period() == *self
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Night => write!(f, "night"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "night" => Ok(Period::Night),
            other => Err(format!("unknown period '{}'", other)),
        }
    }
}

/// A staff member placed in one slot on one calendar date.
///
/// `is_extra` marks supplemental hours that do not count toward the
/// contracted quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Row id assigned by the store.
    pub id: Uuid,
    /// The assigned staff member.
    pub staff_id: Uuid,
    /// The calendar date of the assignment.
    pub date: NaiveDate,
    /// The slot worked.
    #[serde(rename = "shift_slot")]
    pub slot: ShiftSlot,
    /// Whether the hours count as extra rather than contractual.
    pub is_extra: bool,
}

impl ShiftAssignment {
    /// Creates an assignment with a fresh row id.
    pub fn new(staff_id: Uuid, date: NaiveDate, slot: ShiftSlot, is_extra: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id,
            date,
            slot,
            is_extra,
        }
    }

    /// Returns the day of the week of the assignment.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
