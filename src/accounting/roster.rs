//! Role filtering over the staff roster.

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::StaffMember;

/// Sentinel accepted on the wire for "every role".
pub const ALL_ROLES: &str = "all";

/// Restricts board rows and occupancy counts to one role.
///
/// A staff member without a joined role never matches a named role.
///
/// # Example
///
/// ```
/// use shift_board::accounting::RoleFilter;
///
/// assert_eq!("all".parse::<RoleFilter>().unwrap(), RoleFilter::All);
/// assert_eq!(
///     "Médico".parse::<RoleFilter>().unwrap(),
///     RoleFilter::Role("Médico".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleFilter {
    /// No restriction.
    #[default]
    All,
    /// Only staff whose role name equals this value.
    Role(String),
}

impl RoleFilter {
    /// Builds a filter from an optional query value; absent means all.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => RoleFilter::All,
            Some(v) => v.parse().unwrap_or_default(),
        }
    }

    /// Returns true if `staff` passes the filter.
    pub fn matches(&self, staff: &StaffMember) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Role(name) => staff.role_name() == Some(name.as_str()),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_ROLES {
            Ok(RoleFilter::All)
        } else {
            Ok(RoleFilter::Role(s.to_string()))
        }
    }
}

/// Returns the staff rows that pass `filter`, keeping roster order.
pub fn filter_roster<'a>(roster: &'a [StaffMember], filter: &RoleFilter) -> Vec<&'a StaffMember> {
    roster.iter().filter(|s| filter.matches(s)).collect()
}

/// Returns the distinct role names on the roster in first-seen order.
///
/// Staff without a joined role contribute nothing.
pub fn available_roles(roster: &[StaffMember]) -> Vec<String> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter_map(|s| s.role_name())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use uuid::Uuid;

    fn with_role(name: &str, role: Option<&str>) -> StaffMember {
        let mut member = StaffMember::new(name, Uuid::new_v4(), 36);
        member.role = role.map(|r| Role {
            id: member.role_id,
            name: r.to_string(),
        });
        member
    }

    #[test]
    fn test_query_parsing() {
        assert_eq!(RoleFilter::from_query(None), RoleFilter::All);
        assert_eq!(RoleFilter::from_query(Some("all")), RoleFilter::All);
        assert_eq!(RoleFilter::from_query(Some("")), RoleFilter::All);
        assert_eq!(
            RoleFilter::from_query(Some("Condutor")),
            RoleFilter::Role("Condutor".to_string())
        );
    }

    #[test]
    fn test_role_less_staff_only_match_all() {
        let orphan = with_role("Sem Cargo", None);
        assert!(RoleFilter::All.matches(&orphan));
        assert!(!RoleFilter::Role("Médico".to_string()).matches(&orphan));
    }

    #[test]
    fn test_filter_roster_keeps_order() {
        let roster = vec![
            with_role("A", Some("Médico")),
            with_role("B", Some("Enfermeiro")),
            with_role("C", Some("Médico")),
        ];
        let doctors = filter_roster(&roster, &RoleFilter::Role("Médico".to_string()));
        let names: Vec<&str> = doctors.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(filter_roster(&roster, &RoleFilter::All).len(), 3);
    }

    #[test]
    fn test_available_roles_are_distinct_and_skip_missing() {
        let roster = vec![
            with_role("A", Some("Médico")),
            with_role("B", None),
            with_role("C", Some("Condutor")),
            with_role("D", Some("Médico")),
        ];
        assert_eq!(available_roles(&roster), vec!["Médico", "Condutor"]);
    }
}
