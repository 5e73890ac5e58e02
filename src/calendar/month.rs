//! Month enumeration.
//!
//! Turns a `(year, month)` pair into the ordered run of calendar days it
//! contains. Month lengths and leap years come from `chrono`.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Returns every day of the month, 1st to last, in ascending order.
///
/// `month` uses chrono's 1-12 numbering.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12 or the year cannot be represented.
/// Callers validate user input before reaching the engine.
///
/// # Example
///
/// ```
/// use shift_board::calendar::enumerate_month_days;
///
/// let days = enumerate_month_days(2024, 2);
/// assert_eq!(days.len(), 29); // leap year
/// ```
pub fn enumerate_month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    first_of_month(year, month)
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// Returns the first and last day of the month (inclusive range).
///
/// # Example
///
/// ```
/// use shift_board::calendar::month_bounds;
/// use chrono::NaiveDate;
///
/// let (start, end) = month_bounds(2026, 4);
/// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
/// ```
pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let Some(bounds) = checked_month_bounds(year, month) else {
        panic!("month {year}-{month:02} has no representable bounds");
    };
    bounds
}

/// Like [`month_bounds`], but returns `None` when either end of the month
/// falls outside chrono's date range.
///
/// December of `NaiveDate::MAX.year()` has a valid first day but no
/// representable first day of the following month, so it yields `None`.
pub fn checked_month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())?;
    Some((first, last))
}

/// Selects the days whose weekday is listed in `weekdays`, keeping order.
///
/// Used to expand a single edit into every matching day of the month.
pub fn days_on_weekdays(days: &[NaiveDate], weekdays: &[Weekday]) -> Vec<NaiveDate> {
    days.iter()
        .copied()
        .filter(|d| weekdays.contains(&d.weekday()))
        .collect()
}

/// Maps a 0-based index counted from Sunday (0 = Sunday, 6 = Saturday).
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Moves `(year, month)` by `delta` months, crossing year boundaries.
///
/// # Example
///
/// ```
/// use shift_board::calendar::shift_month;
///
/// assert_eq!(shift_month(2026, 1, -1), (2025, 12));
/// assert_eq!(shift_month(2026, 12, 1), (2027, 1));
/// ```
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    assert!(
        (1..=12).contains(&month),
        "month must be in 1..=12, got {month}"
    );
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        panic!("year {year} is out of range");
    };
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(2026, 3, 1), (2026, 4));
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 6, -18), (2024, 12));
        assert_eq!(shift_month(2026, 6, 0), (2026, 6));
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(enumerate_month_days(2026, 1).len(), 31);
        assert_eq!(enumerate_month_days(2026, 2).len(), 28);
        assert_eq!(enumerate_month_days(2026, 4).len(), 30);
        assert_eq!(enumerate_month_days(2026, 12).len(), 31);
    }

    #[test]
    fn test_leap_years_follow_gregorian_rules() {
        assert_eq!(enumerate_month_days(2024, 2).len(), 29);
        assert_eq!(enumerate_month_days(2000, 2).len(), 29);
        assert_eq!(enumerate_month_days(1900, 2).len(), 28);
    }

    #[test]
    fn test_no_days_from_adjacent_months() {
        let days = enumerate_month_days(2026, 3);
        assert_eq!(days.first(), Some(&make_date("2026-03-01")));
        assert_eq!(days.last(), Some(&make_date("2026-03-31")));
        assert!(days.iter().all(|d| d.month() == 3));
    }

    #[test]
    fn test_december_does_not_roll_into_january() {
        let (start, end) = month_bounds(2025, 12);
        assert_eq!(start, make_date("2025-12-01"));
        assert_eq!(end, make_date("2025-12-31"));
    }

    #[test]
    fn test_checked_bounds_at_edges_of_date_range() {
        assert_eq!(checked_month_bounds(NaiveDate::MAX.year(), 12), None);
        assert_eq!(checked_month_bounds(2026, 13), None);

        let (start, end) = checked_month_bounds(NaiveDate::MIN.year(), 1).unwrap();
        assert_eq!(start, NaiveDate::MIN);
        assert_eq!(end.day(), 31);
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_month_zero_panics() {
        enumerate_month_days(2026, 0);
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_month_thirteen_panics() {
        enumerate_month_days(2026, 13);
    }

    #[test]
    fn test_days_on_weekdays_selects_sundays() {
        // March 2026 starts on a Sunday
        let days = enumerate_month_days(2026, 3);
        let sundays = days_on_weekdays(&days, &[Weekday::Sun]);
        assert_eq!(
            sundays,
            vec![
                make_date("2026-03-01"),
                make_date("2026-03-08"),
                make_date("2026-03-15"),
                make_date("2026-03-22"),
                make_date("2026-03-29"),
            ]
        );
    }

    #[test]
    fn test_days_on_weekdays_empty_selection() {
        let days = enumerate_month_days(2026, 3);
        assert!(days_on_weekdays(&days, &[]).is_empty());
    }

    #[test]
    fn test_weekday_index_counts_from_sunday() {
        assert_eq!(weekday_from_sunday_index(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_sunday_index(6), Some(Weekday::Sat));
        assert_eq!(weekday_from_sunday_index(7), None);
        for i in 0..7u8 {
            let wd = weekday_from_sunday_index(i).unwrap();
            assert_eq!(wd.num_days_from_sunday(), u32::from(i));
        }
    }

    proptest! {
        #[test]
        fn prop_month_days_are_contiguous(year in 1600i32..2400, month in 1u32..=12) {
            let days = enumerate_month_days(year, month);
            let (start, end) = month_bounds(year, month);

            prop_assert!((28..=31).contains(&days.len()));
            prop_assert_eq!(days[0].day(), 1);
            prop_assert_eq!(days[days.len() - 1].day() as usize, days.len());
            prop_assert_eq!(days[0], start);
            prop_assert_eq!(days[days.len() - 1], end);
            for pair in days.windows(2) {
                prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
        }
    }
}
