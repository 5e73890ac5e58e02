//! Board service: month loads and shift saves over a [`RecordStore`].

use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounting::{
    RoleFilter, available_roles, compute_month_occupancy, compute_staff_stats, daily_roster,
    filter_roster,
};
use crate::calendar::{
    WeekBucket, checked_month_bounds, days_on_weekdays, enumerate_month_days, group_by_week, month_bounds,
};
use crate::error::{BoardError, BoardResult};
use crate::models::{
    DailyRoster, OccupancyChart, Period, ShiftAssignment, ShiftSlot, StaffMember, StaffStats,
};
use crate::store::RecordStore;

/// One staff row of the board with its hour accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    /// The staff member.
    pub staff: StaffMember,
    /// Monthly and weekly hour figures.
    pub stats: StaffStats,
}

/// Everything needed to render one month of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBoard {
    /// Year shown.
    pub year: i32,
    /// Month shown (1-12).
    pub month: u32,
    /// Every day of the month.
    pub days: Vec<NaiveDate>,
    /// Sunday-to-Saturday week buckets.
    pub weeks: Vec<WeekBucket>,
    /// Role names available for filtering, from the full roster.
    pub available_roles: Vec<String>,
    /// The filter the rows were built with.
    pub role_filter: RoleFilter,
    /// Staff rows passing the filter.
    pub rows: Vec<BoardRow>,
    /// All assignments of the month.
    pub schedules: Vec<ShiftAssignment>,
}

/// A save of one staff member's slots, optionally replicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEdit {
    /// The staff member being edited.
    pub staff_id: Uuid,
    /// The date the edit was made on.
    pub date: NaiveDate,
    /// Slots to keep for each target date; empty clears.
    pub slots: Vec<ShiftSlot>,
    /// Whether the slots count as extra hours.
    pub is_extra: bool,
    /// When non-empty, apply to every day of the month on these weekdays
    /// instead of `date` alone.
    pub replicate_weekdays: Vec<Weekday>,
}

/// Rejects a month the calendar engine would panic on.
pub fn validate_month(year: i32, month: u32) -> BoardResult<()> {
    if !(1..=12).contains(&month) {
        return Err(BoardError::validation(
            "month",
            format!("month must be between 1 and 12, got {}", month),
        ));
    }
    if checked_month_bounds(year, month).is_none() {
        return Err(BoardError::validation(
            "year",
            format!("{}-{:02} is out of the supported date range", year, month),
        ));
    }
    Ok(())
}

/// Loads months and applies edits against a shared store.
///
/// The service is stateless; cloning it shares the same store.
#[derive(Debug)]
pub struct BoardService<S> {
    store: Arc<S>,
}

impl<S> Clone for BoardService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> BoardService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads staff and schedules for the month and derives the board.
    pub async fn load_month(
        &self,
        year: i32,
        month: u32,
        role_filter: &RoleFilter,
    ) -> BoardResult<MonthBoard> {
        validate_month(year, month)?;
        let started = Instant::now();

        let (staff, schedules) = self.fetch_month(year, month).await?;
        let days = enumerate_month_days(year, month);
        let weeks = group_by_week(&days);

        let rows: Vec<BoardRow> = filter_roster(&staff, role_filter)
            .into_iter()
            .map(|member| BoardRow {
                stats: compute_staff_stats(member, &schedules, &weeks),
                staff: member.clone(),
            })
            .collect();

        info!(
            year,
            month,
            staff = rows.len(),
            schedules = schedules.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "Month board loaded"
        );

        Ok(MonthBoard {
            year,
            month,
            available_roles: available_roles(&staff),
            days,
            weeks,
            role_filter: role_filter.clone(),
            rows,
            schedules,
        })
    }

    /// Computes day/night occupancy for every day of the month.
    pub async fn occupancy(
        &self,
        year: i32,
        month: u32,
        role_filter: &RoleFilter,
    ) -> BoardResult<OccupancyChart> {
        validate_month(year, month)?;
        let (staff, schedules) = self.fetch_month(year, month).await?;
        let days = enumerate_month_days(year, month);
        Ok(compute_month_occupancy(&days, &schedules, &staff, role_filter))
    }

    /// Lists who works `period` on `date`.
    pub async fn roster(
        &self,
        date: NaiveDate,
        period: Period,
        role_filter: &RoleFilter,
    ) -> BoardResult<DailyRoster> {
        let staff = self.store.list_staff().await?;
        let schedules = self.store.list_schedules(date, date).await?;
        Ok(daily_roster(period, date, &schedules, &staff, role_filter))
    }

    /// Applies an edit and reloads the month.
    ///
    /// Each target date is replaced concurrently. The reload is only issued
    /// once every write has finished; if any write failed, the first error is
    /// returned and no reload happens.
    pub async fn save_shifts(
        &self,
        year: i32,
        month: u32,
        edit: ShiftEdit,
        role_filter: &RoleFilter,
    ) -> BoardResult<MonthBoard> {
        validate_month(year, month)?;
        if edit.date.year() != year || edit.date.month() != month {
            return Err(BoardError::DateOutsideMonth {
                date: edit.date,
                year,
                month,
            });
        }

        let targets = if edit.replicate_weekdays.is_empty() {
            vec![edit.date]
        } else {
            days_on_weekdays(&enumerate_month_days(year, month), &edit.replicate_weekdays)
        };

        let mut writes = JoinSet::new();
        for date in targets.iter().copied() {
            let store = Arc::clone(&self.store);
            let slots = edit.slots.clone();
            let (staff_id, is_extra) = (edit.staff_id, edit.is_extra);
            writes.spawn(async move {
                store
                    .replace_assignments(staff_id, date, slots, is_extra)
                    .await
            });
        }

        let mut first_error = None;
        while let Some(joined) = writes.join_next().await {
            let outcome = joined.unwrap_or_else(|e| {
                Err(BoardError::WriteFailure {
                    entity: "schedules".to_string(),
                    message: e.to_string(),
                })
            });
            if let Err(err) = outcome {
                warn!(staff_id = %edit.staff_id, error = %err, "Shift write failed");
                first_error.get_or_insert(err);
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        info!(
            staff_id = %edit.staff_id,
            dates = targets.len(),
            slots = edit.slots.len(),
            is_extra = edit.is_extra,
            "Shifts saved"
        );

        self.load_month(year, month, role_filter).await
    }

    async fn fetch_month(
        &self,
        year: i32,
        month: u32,
    ) -> BoardResult<(Vec<StaffMember>, Vec<ShiftAssignment>)> {
        let (start, end) = month_bounds(year, month);
        let staff = self.store.list_staff().await?;
        let schedules = self.store.list_schedules(start, end).await?;
        Ok((staff, schedules))
    }
}
