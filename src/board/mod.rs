//! The month board.
//!
//! [`BoardService`] loads a month from a [`RecordStore`](crate::store::RecordStore),
//! runs the calendar and accounting engines over it and applies shift edits.
//! [`BoardSession`] is the stateful view on top: current month, role filter
//! and the last board that loaded.

mod service;
mod session;

pub use service::{BoardRow, BoardService, MonthBoard, ShiftEdit, validate_month};
pub use session::BoardSession;
