//! Record store contract for the shift board.
//!
//! The board reads and writes four kinds of rows: roles, staff, vehicles and
//! schedules. [`RecordStore`] is the seam between the board service and
//! whatever holds those rows; [`InMemoryStore`] is the implementation used by
//! the server binary and the tests.
//!
//! Input validation happens here, before any write, so the accounting engine
//! can assume referential integrity.

mod memory;

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoardResult;
use crate::models::{Role, ShiftAssignment, ShiftSlot, StaffMember, Vehicle};

pub use memory::InMemoryStore;

/// Fetch / insert / delete access to the board's rows.
///
/// Every method is async; implementations must be shareable across tasks
/// so that per-date writes can run concurrently.
pub trait RecordStore: Send + Sync + 'static {
    /// Lists all roles.
    fn list_roles(&self) -> impl Future<Output = BoardResult<Vec<Role>>> + Send;

    /// Lists staff joined with their role, ordered by role id then name.
    fn list_staff(&self) -> impl Future<Output = BoardResult<Vec<StaffMember>>> + Send;

    /// Registers a staff member.
    fn create_staff(
        &self,
        new_staff: NewStaff,
    ) -> impl Future<Output = BoardResult<StaffMember>> + Send;

    /// Removes a staff member and all of their schedule rows.
    fn delete_staff(&self, id: Uuid) -> impl Future<Output = BoardResult<()>> + Send;

    /// Lists all vehicles.
    fn list_vehicles(&self) -> impl Future<Output = BoardResult<Vec<Vehicle>>> + Send;

    /// Registers a vehicle.
    fn create_vehicle(
        &self,
        new_vehicle: NewVehicle,
    ) -> impl Future<Output = BoardResult<Vehicle>> + Send;

    /// Removes a vehicle.
    fn delete_vehicle(&self, id: Uuid) -> impl Future<Output = BoardResult<()>> + Send;

    /// Lists schedule rows with `start <= date <= end`.
    fn list_schedules(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = BoardResult<Vec<ShiftAssignment>>> + Send;

    /// Replaces every row of `(staff_id, date)` with one row per slot.
    ///
    /// Delete and insert are applied atomically. An empty `slots` clears the
    /// day. Returns the inserted rows.
    fn replace_assignments(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
        slots: Vec<ShiftSlot>,
        is_extra: bool,
    ) -> impl Future<Output = BoardResult<Vec<ShiftAssignment>>> + Send;
}

/// Input for registering a staff member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStaff {
    /// Display name; required.
    pub full_name: String,
    /// Role to register under; required.
    #[serde(default)]
    pub role_id: Option<Uuid>,
    /// Hours expected per week; must be positive.
    pub weekly_contracted_hours: u32,
    /// National tax id.
    #[serde(default)]
    pub cpf: Option<String>,
    /// Identity document number.
    #[serde(default)]
    pub rg: Option<String>,
    /// Professional council registration.
    #[serde(default)]
    pub professional_id: Option<String>,
    /// Driver license number.
    #[serde(default)]
    pub driver_license: Option<String>,
    /// Education level.
    #[serde(default)]
    pub education: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Input for registering a vehicle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVehicle {
    /// Call sign; required.
    pub name: String,
    /// License plate; required, stored upper-case.
    pub plate: String,
    /// National vehicle registry number.
    #[serde(default)]
    pub renavam: Option<String>,
    /// Make and model.
    #[serde(default)]
    pub model: Option<String>,
    /// Operating license number.
    #[serde(default)]
    pub license_number: Option<String>,
    /// Model year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Trims an optional text field, mapping blank to `None`.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
