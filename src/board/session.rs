//! A viewer's position on the board: the month shown and the role filter.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::accounting::RoleFilter;
use crate::calendar::shift_month;
use crate::error::BoardResult;
use crate::store::RecordStore;

use super::service::{BoardService, MonthBoard, ShiftEdit, validate_month};

/// Tracks the month being viewed and the last board that loaded.
///
/// A failed reload keeps the previous board so the view never goes blank.
#[derive(Debug)]
pub struct BoardSession<S> {
    service: BoardService<S>,
    year: i32,
    month: u32,
    role_filter: RoleFilter,
    board: Option<MonthBoard>,
}

impl<S: RecordStore> BoardSession<S> {
    /// Opens a session on `(year, month)` without loading anything.
    pub fn new(service: BoardService<S>, year: i32, month: u32) -> BoardResult<Self> {
        validate_month(year, month)?;
        Ok(Self {
            service,
            year,
            month,
            role_filter: RoleFilter::All,
            board: None,
        })
    }

    /// Opens a session on the month containing `today`.
    pub fn starting_at(service: BoardService<S>, today: NaiveDate) -> Self {
        Self {
            service,
            year: today.year(),
            month: today.month(),
            role_filter: RoleFilter::All,
            board: None,
        }
    }

    /// Year being viewed.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month being viewed (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Active role filter.
    pub fn role_filter(&self) -> &RoleFilter {
        &self.role_filter
    }

    /// The last board that loaded successfully, if any.
    pub fn board(&self) -> Option<&MonthBoard> {
        self.board.as_ref()
    }

    /// Moves the view by `delta` months and reloads.
    pub async fn change_month(&mut self, delta: i32) -> BoardResult<()> {
        let (year, month) = shift_month(self.year, self.month, delta);
        validate_month(year, month)?;
        self.year = year;
        self.month = month;
        self.reload().await
    }

    /// Changes the role filter and reloads.
    pub async fn set_role_filter(&mut self, filter: RoleFilter) -> BoardResult<()> {
        self.role_filter = filter;
        self.reload().await
    }

    /// Fetches the current month again.
    pub async fn reload(&mut self) -> BoardResult<()> {
        match self
            .service
            .load_month(self.year, self.month, &self.role_filter)
            .await
        {
            Ok(board) => {
                self.board = Some(board);
                Ok(())
            }
            Err(err) => {
                warn!(
                    year = self.year,
                    month = self.month,
                    error = %err,
                    stale = self.board.is_some(),
                    "Board reload failed, keeping previous data"
                );
                Err(err)
            }
        }
    }

    /// Saves an edit on the current month.
    pub async fn save(&mut self, edit: ShiftEdit) -> BoardResult<()> {
        let board = self
            .service
            .save_shifts(self.year, self.month, edit, &self.role_filter)
            .await?;
        self.board = Some(board);
        Ok(())
    }
}
