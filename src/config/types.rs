//! Configuration types for the shift board.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

fn default_weekly_hours() -> u32 {
    36
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Metadata about the operational unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMetadata {
    /// The unit's display name (e.g., "SAMU Base Centro").
    pub unit_name: String,
    /// Weekly hours used for seeded staff that do not specify their own.
    #[serde(default = "default_weekly_hours")]
    pub default_weekly_hours: u32,
    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Roles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Role names.
    pub roles: Vec<String>,
}

/// A staff member to load into the store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffSeed {
    /// Display name.
    pub full_name: String,
    /// Name of the role, as listed in `roles.yaml`.
    pub role: String,
    /// Weekly contract; falls back to the unit default.
    #[serde(default)]
    pub weekly_contracted_hours: Option<u32>,
    /// National tax id.
    #[serde(default)]
    pub cpf: Option<String>,
    /// Professional council registration.
    #[serde(default)]
    pub professional_id: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Staff configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffConfig {
    /// Seed roster.
    pub staff: Vec<StaffSeed>,
}

/// A vehicle to load into the store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleSeed {
    /// Call sign.
    pub name: String,
    /// License plate.
    pub plate: String,
    /// Make and model.
    #[serde(default)]
    pub model: Option<String>,
    /// Model year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Free-form status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Vehicles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct VehiclesConfig {
    /// Seed fleet.
    pub vehicles: Vec<VehicleSeed>,
}

/// The complete board configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    metadata: BoardMetadata,
    roles: Vec<String>,
    staff: Vec<StaffSeed>,
    vehicles: Vec<VehicleSeed>,
}

impl BoardConfig {
    /// Creates a new BoardConfig from its component parts.
    pub fn new(
        metadata: BoardMetadata,
        roles: Vec<String>,
        staff: Vec<StaffSeed>,
        vehicles: Vec<VehicleSeed>,
    ) -> Self {
        Self {
            metadata,
            roles,
            staff,
            vehicles,
        }
    }

    /// Returns the unit metadata.
    pub fn metadata(&self) -> &BoardMetadata {
        &self.metadata
    }

    /// Returns the seed role names.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns the seed roster.
    pub fn staff(&self) -> &[StaffSeed] {
        &self.staff
    }

    /// Returns the seed fleet.
    pub fn vehicles(&self) -> &[VehicleSeed] {
        &self.vehicles
    }
}
