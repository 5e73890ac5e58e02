//! In-memory record store.

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::accounting::MAX_WEEKLY_HOURS;
use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::models::{Role, ShiftAssignment, ShiftSlot, StaffMember, Vehicle};

use super::{NewStaff, NewVehicle, RecordStore, clean_optional};

#[derive(Debug, Default)]
struct Tables {
    roles: Vec<Role>,
    staff: Vec<StaffMember>,
    vehicles: Vec<Vehicle>,
    schedules: Vec<ShiftAssignment>,
}

/// A [`RecordStore`] holding all rows in memory behind one lock.
///
/// Each write runs under a single write guard, so readers never observe a
/// half-applied replace.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated from configuration.
    ///
    /// Staff entries reference roles by name; the loader has already checked
    /// that every referenced role exists.
    pub fn seeded(config: &BoardConfig) -> Self {
        let roles: Vec<Role> = config
            .roles()
            .iter()
            .map(|name| Role {
                id: Uuid::new_v4(),
                name: name.clone(),
            })
            .collect();

        let default_hours = config.metadata().default_weekly_hours;
        let staff = config
            .staff()
            .iter()
            .filter_map(|seed| {
                let role = roles.iter().find(|r| r.name == seed.role)?;
                let mut member = StaffMember::new(
                    seed.full_name.clone(),
                    role.id,
                    seed.weekly_contracted_hours.unwrap_or(default_hours),
                );
                member.cpf = seed.cpf.clone();
                member.professional_id = seed.professional_id.clone();
                member.contact_phone = seed.contact_phone.clone();
                Some(member)
            })
            .collect::<Vec<_>>();

        let vehicles = config
            .vehicles()
            .iter()
            .map(|seed| Vehicle {
                id: Uuid::new_v4(),
                name: seed.name.clone(),
                plate: seed.plate.to_uppercase(),
                renavam: None,
                model: seed.model.clone(),
                license_number: None,
                year: seed.year,
                status: seed.status.clone(),
            })
            .collect::<Vec<_>>();

        info!(
            roles = roles.len(),
            staff = staff.len(),
            vehicles = vehicles.len(),
            "Seeded in-memory store"
        );

        Self {
            tables: RwLock::new(Tables {
                roles,
                staff,
                vehicles,
                schedules: Vec::new(),
            }),
        }
    }

    /// Adds a role and returns it.
    pub async fn insert_role(&self, name: impl Into<String>) -> BoardResult<Role> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(BoardError::validation("name", "role name is required"));
        }

        let mut tables = self.tables.write().await;
        if tables.roles.iter().any(|r| r.name == name) {
            return Err(BoardError::validation(
                "name",
                format!("role '{}' already exists", name),
            ));
        }

        let role = Role {
            id: Uuid::new_v4(),
            name,
        };
        tables.roles.push(role.clone());
        Ok(role)
    }
}

impl Tables {
    fn joined(&self, member: &StaffMember) -> StaffMember {
        let mut member = member.clone();
        member.role = self.roles.iter().find(|r| r.id == member.role_id).cloned();
        member
    }
}

impl RecordStore for InMemoryStore {
    async fn list_roles(&self) -> BoardResult<Vec<Role>> {
        Ok(self.tables.read().await.roles.clone())
    }

    async fn list_staff(&self) -> BoardResult<Vec<StaffMember>> {
        let tables = self.tables.read().await;
        let mut staff: Vec<StaffMember> = tables.staff.iter().map(|s| tables.joined(s)).collect();
        staff.sort_by(|a, b| {
            a.role_id
                .cmp(&b.role_id)
                .then_with(|| a.full_name.cmp(&b.full_name))
        });
        Ok(staff)
    }

    async fn create_staff(&self, new_staff: NewStaff) -> BoardResult<StaffMember> {
        let Some(role_id) = new_staff.role_id else {
            return Err(BoardError::validation("role_id", "a role must be selected"));
        };
        let full_name = new_staff.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(BoardError::validation("full_name", "name is required"));
        }
        if !(1..=MAX_WEEKLY_HOURS).contains(&new_staff.weekly_contracted_hours) {
            return Err(BoardError::validation(
                "weekly_contracted_hours",
                format!(
                    "must be between 1 and {} hours, got {}",
                    MAX_WEEKLY_HOURS, new_staff.weekly_contracted_hours
                ),
            ));
        }

        let mut tables = self.tables.write().await;
        if !tables.roles.iter().any(|r| r.id == role_id) {
            return Err(BoardError::validation(
                "role_id",
                format!("unknown role {}", role_id),
            ));
        }

        let member = StaffMember {
            id: Uuid::new_v4(),
            full_name,
            role_id,
            role: None,
            weekly_contracted_hours: new_staff.weekly_contracted_hours,
            cpf: clean_optional(new_staff.cpf),
            rg: clean_optional(new_staff.rg),
            professional_id: clean_optional(new_staff.professional_id),
            driver_license: clean_optional(new_staff.driver_license),
            education: clean_optional(new_staff.education),
            contact_phone: clean_optional(new_staff.contact_phone),
        };
        tables.staff.push(member.clone());

        debug!(staff_id = %member.id, "Staff member created");
        Ok(tables.joined(&member))
    }

    async fn delete_staff(&self, id: Uuid) -> BoardResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.staff.len();
        tables.staff.retain(|s| s.id != id);
        if tables.staff.len() == before {
            return Err(BoardError::StaffNotFound { id });
        }
        tables.schedules.retain(|a| a.staff_id != id);

        debug!(staff_id = %id, "Staff member deleted");
        Ok(())
    }

    async fn list_vehicles(&self) -> BoardResult<Vec<Vehicle>> {
        Ok(self.tables.read().await.vehicles.clone())
    }

    async fn create_vehicle(&self, new_vehicle: NewVehicle) -> BoardResult<Vehicle> {
        let name = new_vehicle.name.trim().to_string();
        let plate = new_vehicle.plate.trim().to_uppercase();
        if name.is_empty() {
            return Err(BoardError::validation("name", "name is required"));
        }
        if plate.is_empty() {
            return Err(BoardError::validation("plate", "plate is required"));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name,
            plate,
            renavam: clean_optional(new_vehicle.renavam),
            model: clean_optional(new_vehicle.model),
            license_number: clean_optional(new_vehicle.license_number),
            year: new_vehicle.year,
            status: None,
        };
        self.tables.write().await.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn delete_vehicle(&self, id: Uuid) -> BoardResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.vehicles.len();
        tables.vehicles.retain(|v| v.id != id);
        if tables.vehicles.len() == before {
            return Err(BoardError::VehicleNotFound { id });
        }
        Ok(())
    }

    async fn list_schedules(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoardResult<Vec<ShiftAssignment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .schedules
            .iter()
            .filter(|a| a.date >= start && a.date <= end)
            .cloned()
            .collect())
    }

    async fn replace_assignments(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
        slots: Vec<ShiftSlot>,
        is_extra: bool,
    ) -> BoardResult<Vec<ShiftAssignment>> {
        let mut unique: Vec<ShiftSlot> = Vec::with_capacity(slots.len());
        for slot in slots {
            if !unique.contains(&slot) {
                unique.push(slot);
            }
        }

        let mut tables = self.tables.write().await;
        if !tables.staff.iter().any(|s| s.id == staff_id) {
            return Err(BoardError::validation(
                "staff_id",
                format!("unknown staff member {}", staff_id),
            ));
        }

        tables
            .schedules
            .retain(|a| !(a.staff_id == staff_id && a.date == date));

        let inserted: Vec<ShiftAssignment> = unique
            .into_iter()
            .map(|slot| ShiftAssignment::new(staff_id, date, slot, is_extra))
            .collect();
        tables.schedules.extend(inserted.iter().cloned());

        debug!(
            staff_id = %staff_id,
            date = %date,
            slots = inserted.len(),
            is_extra,
            "Assignments replaced"
        );
        Ok(inserted)
    }
}
