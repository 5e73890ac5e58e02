//! Per-person monthly and weekly hour accounting.

use crate::calendar::WeekBucket;
use crate::models::{ShiftAssignment, StaffMember, StaffStats, WeekStats, WeekStatus};

use super::hours::{compute_monthly_target, hours_for_assignments};

/// Computes monthly totals and the weekly breakdown for one staff member.
///
/// Contractual (`is_extra == false`) and extra assignments are totalled
/// separately. Each week bucket takes the assignments whose date lies in
/// its inclusive range and is classified on contractual hours only; extra
/// hours never affect the classification. Assignments for other staff are
/// ignored.
///
/// # Example
///
/// ```
/// use shift_board::accounting::compute_staff_stats;
/// use shift_board::calendar::{enumerate_month_days, group_by_week};
/// use shift_board::models::{ShiftAssignment, ShiftSlot, StaffMember};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let member = StaffMember::new("Ana Souza", Uuid::new_v4(), 36);
/// let weeks = group_by_week(&enumerate_month_days(2026, 3));
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let shifts: Vec<_> = ShiftSlot::ALL
///     .iter()
///     .map(|slot| ShiftAssignment::new(member.id, date, *slot, false))
///     .collect();
///
/// let stats = compute_staff_stats(&member, &shifts, &weeks);
/// assert_eq!(stats.total_contractual_hours, 24);
/// assert_eq!(stats.remaining_monthly, 120);
/// assert!(stats.weekly[0].is_under_limit());
/// ```
pub fn compute_staff_stats(
    staff: &StaffMember,
    assignments: &[ShiftAssignment],
    weeks: &[WeekBucket],
) -> StaffStats {
    let own: Vec<&ShiftAssignment> = assignments
        .iter()
        .filter(|a| a.staff_id == staff.id)
        .collect();

    let (extra, contractual): (Vec<&ShiftAssignment>, Vec<&ShiftAssignment>) =
        own.iter().partition(|a| a.is_extra);

    let monthly_target = compute_monthly_target(staff.weekly_contracted_hours);
    let total_contractual_hours = hours_for_assignments(contractual.iter().copied());
    let total_extra_hours = hours_for_assignments(extra.iter().copied());

    let weekly = weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let in_week = || own.iter().copied().filter(move |a| week.contains(a.date));
            let contractual_hours = hours_for_assignments(in_week().filter(|a| !a.is_extra));
            let extra_hours = hours_for_assignments(in_week().filter(|a| a.is_extra));

            WeekStats {
                week_index: index + 1,
                start: week.start(),
                end: week.end(),
                contractual_hours,
                extra_hours,
                status: WeekStatus::classify(contractual_hours, staff.weekly_contracted_hours),
            }
        })
        .collect();

    StaffStats {
        staff_id: staff.id,
        monthly_target,
        total_contractual_hours,
        total_extra_hours,
        remaining_monthly: i64::from(monthly_target) - i64::from(total_contractual_hours),
        weekly,
    }
}
