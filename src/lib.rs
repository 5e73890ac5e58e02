//! Monthly shift board for an emergency medical unit.
//!
//! This crate partitions a month into Sunday-to-Saturday weeks, places staff
//! in fixed six-hour slots and accounts contracted versus extra hours against
//! each member's weekly contract. It also reports day and night occupancy and
//! exposes everything over an HTTP API backed by a record store.

#![warn(missing_docs)]

pub mod accounting;
pub mod api;
pub mod board;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
