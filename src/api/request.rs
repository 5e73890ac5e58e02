//! Request types for the shift board API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! board endpoints, plus their conversion into domain types.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounting::RoleFilter;
use crate::board::ShiftEdit;
use crate::calendar::weekday_from_sunday_index;
use crate::error::{BoardError, BoardResult};
use crate::models::ShiftSlot;

/// Request body for `PUT /board/:year/:month/shifts`.
///
/// Replaces the slots of one staff member on `date`, or on every day of the
/// month falling on one of `replicate_weekdays` when that list is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveShiftsRequest {
    /// The staff member being edited.
    pub staff_id: Uuid,
    /// The date the edit was made on.
    pub date: NaiveDate,
    /// Slots to keep; empty clears the day.
    #[serde(default)]
    pub slots: Vec<ShiftSlot>,
    /// Whether the hours are extra.
    #[serde(default)]
    pub is_extra: bool,
    /// Weekday indices, 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub replicate_weekdays: Vec<u8>,
}

impl SaveShiftsRequest {
    /// Converts the request into a [`ShiftEdit`], rejecting bad weekday indices.
    pub fn into_edit(self) -> BoardResult<ShiftEdit> {
        let replicate_weekdays = self
            .replicate_weekdays
            .iter()
            .map(|&index| {
                weekday_from_sunday_index(index).ok_or_else(|| {
                    BoardError::validation(
                        "replicate_weekdays",
                        format!("weekday index must be between 0 and 6, got {}", index),
                    )
                })
            })
            .collect::<BoardResult<Vec<Weekday>>>()?;

        Ok(ShiftEdit {
            staff_id: self.staff_id,
            date: self.date,
            slots: self.slots,
            is_extra: self.is_extra,
            replicate_weekdays,
        })
    }
}

/// `?role=` query accepted by the board and occupancy endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleQuery {
    /// Role name, or `all`.
    #[serde(default)]
    pub role: Option<String>,
}

impl RoleQuery {
    /// Returns the role filter this query selects.
    pub fn filter(&self) -> RoleFilter {
        RoleFilter::from_query(self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_save_request() {
        let json = r#"{
            "staff_id": "7d9f8b3a-1c2e-4f5a-9b8c-0d1e2f3a4b5c",
            "date": "2026-03-02",
            "slots": ["07-13", "19-00"],
            "is_extra": true,
            "replicate_weekdays": [1, 3]
        }"#;

        let request: SaveShiftsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.slots, vec![ShiftSlot::Morning, ShiftSlot::Evening]);
        assert!(request.is_extra);

        let edit = request.into_edit().unwrap();
        assert_eq!(edit.replicate_weekdays, vec![Weekday::Mon, Weekday::Wed]);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "staff_id": "7d9f8b3a-1c2e-4f5a-9b8c-0d1e2f3a4b5c",
            "date": "2026-03-02"
        }"#;

        let request: SaveShiftsRequest = serde_json::from_str(json).unwrap();
        assert!(request.slots.is_empty());
        assert!(!request.is_extra);
        assert!(request.replicate_weekdays.is_empty());
    }

    #[test]
    fn test_unknown_slot_label_is_rejected() {
        let json = r#"{
            "staff_id": "7d9f8b3a-1c2e-4f5a-9b8c-0d1e2f3a4b5c",
            "date": "2026-03-02",
            "slots": ["08-14"]
        }"#;

        assert!(serde_json::from_str::<SaveShiftsRequest>(json).is_err());
    }

    #[test]
    fn test_weekday_index_out_of_range() {
        let request = SaveShiftsRequest {
            staff_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            slots: vec![],
            is_extra: false,
            replicate_weekdays: vec![7],
        };

        assert!(matches!(
            request.into_edit(),
            Err(BoardError::ValidationFailure { field, .. }) if field == "replicate_weekdays"
        ));
    }

    #[test]
    fn test_role_query_filter() {
        assert_eq!(RoleQuery::default().filter(), RoleFilter::All);
        let query = RoleQuery {
            role: Some("Condutor".to_string()),
        };
        assert_eq!(query.filter(), RoleFilter::Role("Condutor".to_string()));
    }
}
