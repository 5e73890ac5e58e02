//! Week bucketing.
//!
//! Splits an ordered run of days into Sunday-to-Saturday weeks. A week is
//! closed after every Saturday and at the end of the input, so the first and
//! last weeks of a month may be partial.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The weekday that closes a week bucket.
pub const WEEK_CLOSING_DAY: Weekday = Weekday::Sat;

/// A contiguous, non-empty run of days within one month.
///
/// Buckets are built by [`group_by_week`], which guarantees at least one
/// day. Deserializing goes through [`TryFrom`] and rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeekBucket")]
pub struct WeekBucket {
    days: Vec<NaiveDate>,
}

#[derive(Deserialize)]
struct RawWeekBucket {
    days: Vec<NaiveDate>,
}

impl TryFrom<RawWeekBucket> for WeekBucket {
    type Error = String;

    fn try_from(raw: RawWeekBucket) -> Result<Self, Self::Error> {
        if raw.days.is_empty() {
            return Err("a week bucket needs at least one day".to_string());
        }
        Ok(Self { days: raw.days })
    }
}

impl WeekBucket {
    /// The days in the bucket, in order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The first day of the bucket.
    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    /// The last day of the bucket.
    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Number of days in the bucket (1 to 7 for month input).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false; buckets are never empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns true if `date` lies in `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }
}

/// Groups days into week buckets.
///
/// Each day is appended to the current bucket; the bucket is closed right
/// after a Saturday or after the last day. No empty bucket is ever emitted,
/// including when the final day is itself a Saturday.
///
/// # Example
///
/// ```
/// use shift_board::calendar::{enumerate_month_days, group_by_week};
///
/// // April 2026 starts on a Wednesday
/// let weeks = group_by_week(&enumerate_month_days(2026, 4));
/// let lengths: Vec<usize> = weeks.iter().map(|w| w.len()).collect();
/// assert_eq!(lengths, vec![4, 7, 7, 7, 5]);
/// ```
pub fn group_by_week(days: &[NaiveDate]) -> Vec<WeekBucket> {
    let mut weeks = Vec::new();
    let mut current = Vec::new();

    for day in days {
        current.push(*day);
        if day.weekday() == WEEK_CLOSING_DAY {
            weeks.push(WeekBucket {
                days: std::mem::take(&mut current),
            });
        }
    }

    if !current.is_empty() {
        weeks.push(WeekBucket { days: current });
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::enumerate_month_days;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn lengths(weeks: &[WeekBucket]) -> Vec<usize> {
        weeks.iter().map(|w| w.len()).collect()
    }

    #[test]
    fn test_30_day_month_starting_wednesday() {
        // 2026-04-01 is a Wednesday
        let weeks = group_by_week(&enumerate_month_days(2026, 4));
        assert_eq!(lengths(&weeks), vec![4, 7, 7, 7, 5]);
        assert_eq!(weeks[0].start(), make_date("2026-04-01"));
        assert_eq!(weeks[0].end(), make_date("2026-04-04"));
        assert_eq!(weeks[0].end().weekday(), Weekday::Sat);
    }

    #[test]
    fn test_month_starting_sunday_has_full_first_week() {
        // 2026-03-01 is a Sunday
        let weeks = group_by_week(&enumerate_month_days(2026, 3));
        assert_eq!(lengths(&weeks), vec![7, 7, 7, 7, 3]);
    }

    #[test]
    fn test_month_starting_saturday_has_single_day_first_week() {
        // 2025-11-01 is a Saturday
        let weeks = group_by_week(&enumerate_month_days(2025, 11));
        assert_eq!(weeks[0].len(), 1);
        assert_eq!(weeks[0].start(), make_date("2025-11-01"));
    }

    #[test]
    fn test_month_ending_saturday_emits_no_empty_week() {
        // 2026-01-31 is a Saturday
        let weeks = group_by_week(&enumerate_month_days(2026, 1));
        assert_eq!(lengths(&weeks), vec![3, 7, 7, 7, 7]);
        assert!(weeks.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_february_exact_four_weeks() {
        // 2015-02-01 is a Sunday and 2015 is not a leap year
        let weeks = group_by_week(&enumerate_month_days(2015, 2));
        assert_eq!(lengths(&weeks), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_empty_input_yields_no_weeks() {
        assert!(group_by_week(&[]).is_empty());
    }

    #[test]
    fn test_bucket_contains_is_inclusive() {
        let weeks = group_by_week(&enumerate_month_days(2026, 4));
        let first = &weeks[0];
        assert!(first.contains(make_date("2026-04-01")));
        assert!(first.contains(make_date("2026-04-04")));
        assert!(!first.contains(make_date("2026-04-05")));
        assert!(!first.contains(make_date("2026-03-31")));
    }

    #[test]
    fn test_deserialize_rejects_empty_bucket() {
        let result = serde_json::from_str::<WeekBucket>(r#"{"days":[]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least one day"));
    }

    #[test]
    fn test_deserialize_keeps_days() {
        let bucket: WeekBucket =
            serde_json::from_str(r#"{"days":["2026-04-26","2026-04-27"]}"#).unwrap();
        assert_eq!(bucket.start(), make_date("2026-04-26"));
        assert_eq!(bucket.end(), make_date("2026-04-27"));
        assert_eq!(serde_json::to_value(&bucket).unwrap()["days"][1], "2026-04-27");
    }

    proptest! {
        #[test]
        fn prop_grouping_is_a_lossless_partition(year in 1800i32..2300, month in 1u32..=12) {
            let days = enumerate_month_days(year, month);
            let weeks = group_by_week(&days);

            let flattened: Vec<NaiveDate> =
                weeks.iter().flat_map(|w| w.days().iter().copied()).collect();
            prop_assert_eq!(&flattened, &days);

            for (i, week) in weeks.iter().enumerate() {
                prop_assert!((1..=7).contains(&week.len()));
                if i != 0 && i != weeks.len() - 1 {
                    prop_assert_eq!(week.len(), 7);
                }
                if i != weeks.len() - 1 {
                    prop_assert_eq!(week.end().weekday(), Weekday::Sat);
                }
                if i != 0 {
                    prop_assert_eq!(week.start().weekday(), Weekday::Sun);
                }
            }
        }

        #[test]
        fn prop_any_contiguous_run_partitions(offset in 0i64..4000, len in 0usize..60) {
            let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                + chrono::Duration::days(offset);
            let days: Vec<NaiveDate> = start.iter_days().take(len).collect();
            let weeks = group_by_week(&days);

            let flattened: Vec<NaiveDate> =
                weeks.iter().flat_map(|w| w.days().iter().copied()).collect();
            prop_assert_eq!(flattened, days);
            prop_assert!(weeks.iter().all(|w| (1..=7).contains(&w.len())));
        }
    }
}
