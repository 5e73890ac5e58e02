//! Hour arithmetic.
//!
//! Every slot is worth [`HOURS_PER_SLOT`] hours, so hours are always a count
//! of assignments times six.

use crate::models::{HOURS_PER_SLOT, ShiftAssignment};

/// Number of weeks a monthly target is assumed to span.
///
/// This is a flat approximation, not days-in-month / 7.
pub const MONTHLY_TARGET_WEEKS: u32 = 4;

/// Largest weekly contract the store accepts: the hours in a week.
pub const MAX_WEEKLY_HOURS: u32 = 168;

/// Returns the monthly hour target for a weekly contract.
///
/// Contracts above [`MAX_WEEKLY_HOURS`] never reach the store; out-of-range
/// values built by hand saturate instead of overflowing.
///
/// # Example
///
/// ```
/// use shift_board::accounting::compute_monthly_target;
///
/// assert_eq!(compute_monthly_target(36), 144);
/// assert_eq!(compute_monthly_target(40), 160);
/// ```
pub fn compute_monthly_target(weekly_contracted_hours: u32) -> u32 {
    debug_assert!(
        weekly_contracted_hours > 0,
        "weekly contracted hours must be positive"
    );
    weekly_contracted_hours.saturating_mul(MONTHLY_TARGET_WEEKS)
}

/// Returns the hours covered by a set of assignments.
///
/// The slot is irrelevant: each assignment counts [`HOURS_PER_SLOT`].
pub fn hours_for_assignments<'a, I>(assignments: I) -> u32
where
    I: IntoIterator<Item = &'a ShiftAssignment>,
{
    assignments.into_iter().count() as u32 * HOURS_PER_SLOT
}
