//! Staff, role and vehicle models.
//!
//! This module defines the registry entities owned by the record store.
//! The accounting engine reads [`StaffMember`] but never mutates it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job function (e.g., "Médico", "Condutor").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role.
    pub id: Uuid,
    /// Display name of the role.
    pub name: String,
}

/// A person who can be placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: Uuid,
    /// Display name.
    pub full_name: String,
    /// The role this member was registered with.
    pub role_id: Uuid,
    /// The joined role row, absent if the role could not be resolved.
    #[serde(default, rename = "roles")]
    pub role: Option<Role>,
    /// Hours expected per 7-day week.
    pub weekly_contracted_hours: u32,
    /// National tax id.
    #[serde(default)]
    pub cpf: Option<String>,
    /// National identity document number.
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

impl StaffMember {
    /// Returns the joined role name, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_board::models::{Role, StaffMember};
    /// use uuid::Uuid;
    ///
    /// let role = Role { id: Uuid::new_v4(), name: "Enfermeiro".to_string() };
    /// let mut member = StaffMember::new("Ana Souza", role.id, 36);
    /// assert_eq!(member.role_name(), None);
    ///
    /// member.role = Some(role);
    /// assert_eq!(member.role_name(), Some("Enfermeiro"));
    /// ```
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.name.as_str())
    }

    /// Creates a staff member with a fresh id and no optional registry data.
    pub fn new(full_name: impl Into<String>, role_id: Uuid, weekly_contracted_hours: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            role_id,
            role: None,
            weekly_contracted_hours,
            cpf: None,
            rg: None,
            professional_id: None,
            driver_license: None,
            education: None,
            contact_phone: None,
        }
    }
}

/// An ambulance or other unit vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier for the vehicle.
    pub id: Uuid,
    /// Call sign or display name.
    pub name: String,
    /// License plate, stored upper-case.
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
    /// Free-form status (e.g., "active").
    #[serde(default)]
    pub status: Option<String>,
}
