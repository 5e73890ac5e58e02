//! HTTP API module for the shift board.
//!
//! This module provides the REST endpoints for viewing a month's board,
//! saving shift edits, reading occupancy and managing staff and vehicles.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RoleQuery, SaveShiftsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
