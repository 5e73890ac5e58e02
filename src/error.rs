//! Error types for the shift board.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can surface from configuration, the record store
//! and the board service. The calendar and accounting engines never fail.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the shift board.
///
/// # Example
///
/// ```
/// use shift_board::error::BoardError;
///
/// let error = BoardError::ConfigNotFound {
///     path: "/missing/board.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/board.yaml");
/// ```
#[derive(Debug, Error)]
pub enum BoardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reading rows from the store failed.
    #[error("Failed to fetch {entity}: {message}")]
    FetchFailure {
        /// The entity being fetched (e.g., "schedules").
        entity: String,
        /// A description of the failure.
        message: String,
    },

    /// Input was rejected before any write was attempted.
    #[error("Invalid field '{field}': {message}")]
    ValidationFailure {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An insert or delete was rejected by the store.
    #[error("Failed to write {entity}: {message}")]
    WriteFailure {
        /// The entity being written.
        entity: String,
        /// A description of the failure.
        message: String,
    },

    /// No staff member exists with the given id.
    #[error("Staff member not found: {id}")]
    StaffNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No vehicle exists with the given id.
    #[error("Vehicle not found: {id}")]
    VehicleNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// A date was outside the month being edited.
    #[error("Date {date} is outside {year}-{month:02}")]
    DateOutsideMonth {
        /// The rejected date.
        date: NaiveDate,
        /// The year of the active month.
        year: i32,
        /// The active month (1-12).
        month: u32,
    },
}

impl BoardError {
    /// Shorthand for a [`BoardError::ValidationFailure`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BoardError::ValidationFailure {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return BoardError.
pub type BoardResult<T> = Result<T, BoardError>;
