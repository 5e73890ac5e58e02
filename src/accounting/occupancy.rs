//! Day and night occupancy.
//!
//! Occupancy counts distinct staff, not assignment rows: someone on both
//! `07-13` and `13-19` counts once toward the day. Staff IDs missing from the
//! roster are not counted.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    DailyOccupancy, DailyRoster, HOURS_PER_SLOT, OccupancyChart, Period, RosterEntry,
    ShiftAssignment, StaffMember,
};

use super::roster::RoleFilter;

/// Counts distinct staff working `period` on `date` who pass `role_filter`.
///
/// # Example
///
/// ```
/// use shift_board::accounting::{compute_occupancy, RoleFilter};
/// use shift_board::models::{Period, ShiftAssignment, ShiftSlot, StaffMember};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let member = StaffMember::new("Ana Souza", Uuid::new_v4(), 36);
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let shifts = vec![
///     ShiftAssignment::new(member.id, date, ShiftSlot::Morning, false),
///     ShiftAssignment::new(member.id, date, ShiftSlot::Afternoon, false),
/// ];
///
/// let roster = [member];
/// assert_eq!(compute_occupancy(Period::Day, date, &shifts, &roster, &RoleFilter::All), 1);
/// assert_eq!(compute_occupancy(Period::Night, date, &shifts, &roster, &RoleFilter::All), 0);
/// ```
pub fn compute_occupancy(
    period: Period,
    date: NaiveDate,
    assignments: &[ShiftAssignment],
    roster: &[StaffMember],
    role_filter: &RoleFilter,
) -> usize {
    count_present(period, date, assignments, &index_roster(roster), role_filter)
}

/// Computes day and night occupancy for every day in `days`.
///
/// The chart maxima are floored at 1 so a month with nobody scheduled still
/// has a usable scale.
pub fn compute_month_occupancy(
    days: &[NaiveDate],
    assignments: &[ShiftAssignment],
    roster: &[StaffMember],
    role_filter: &RoleFilter,
) -> OccupancyChart {
    let index = index_roster(roster);
    let days: Vec<DailyOccupancy> = days
        .iter()
        .map(|&date| DailyOccupancy {
            date,
            day_count: count_present(Period::Day, date, assignments, &index, role_filter),
            night_count: count_present(Period::Night, date, assignments, &index, role_filter),
        })
        .collect();

    let max_day = days.iter().map(|d| d.day_count).max().unwrap_or(0).max(1);
    let max_night = days.iter().map(|d| d.night_count).max().unwrap_or(0).max(1);

    OccupancyChart {
        days,
        max_day,
        max_night,
    }
}

/// Lists everyone working `period` on `date`, largest hours first.
///
/// Each entry carries only the slots inside the period. Ties keep the order
/// in which staff first appear in `assignments`.
pub fn daily_roster(
    period: Period,
    date: NaiveDate,
    assignments: &[ShiftAssignment],
    roster: &[StaffMember],
    role_filter: &RoleFilter,
) -> DailyRoster {
    let index = index_roster(roster);
    let in_period: Vec<&ShiftAssignment> = in_period(period, date, assignments).collect();

    let mut seen = HashSet::new();
    let mut entries: Vec<RosterEntry> = in_period
        .iter()
        .map(|a| a.staff_id)
        .filter(|id| seen.insert(*id))
        .filter_map(|id| index.get(&id).copied())
        .filter(|staff| role_filter.matches(staff))
        .map(|staff| {
            let own: Vec<&ShiftAssignment> = in_period
                .iter()
                .copied()
                .filter(|a| a.staff_id == staff.id)
                .collect();
            RosterEntry {
                staff_id: staff.id,
                full_name: staff.full_name.clone(),
                role_name: staff.role_name().map(str::to_string),
                hours: own.len() as u32 * HOURS_PER_SLOT,
                is_extra: own.iter().any(|a| a.is_extra),
                slots: own.iter().map(|a| a.slot).collect(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.hours.cmp(&a.hours));
    let total_hours = entries.iter().map(|e| e.hours).sum();

    DailyRoster {
        date,
        entries,
        total_hours,
    }
}

fn index_roster(roster: &[StaffMember]) -> HashMap<Uuid, &StaffMember> {
    roster.iter().map(|s| (s.id, s)).collect()
}

fn in_period(
    period: Period,
    date: NaiveDate,
    assignments: &[ShiftAssignment],
) -> impl Iterator<Item = &ShiftAssignment> {
    assignments
        .iter()
        .filter(move |a| a.date == date && period.contains(a.slot))
}

fn count_present(
    period: Period,
    date: NaiveDate,
    assignments: &[ShiftAssignment],
    index: &HashMap<Uuid, &StaffMember>,
    role_filter: &RoleFilter,
) -> usize {
    let present: HashSet<Uuid> = in_period(period, date, assignments)
        .map(|a| a.staff_id)
        .collect();

    present
        .iter()
        .filter_map(|id| index.get(id))
        .filter(|staff| role_filter.matches(staff))
        .count()
}
