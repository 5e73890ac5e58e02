//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading board
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::accounting::MAX_WEEKLY_HOURS;
use crate::error::{BoardError, BoardResult};

use super::types::{
    BoardConfig, BoardMetadata, RolesConfig, StaffConfig, VehicleSeed, VehiclesConfig,
};

const WEEKLY_HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=MAX_WEEKLY_HOURS;

/// Loads and provides access to board configuration.
///
/// # Directory Structure
///
/// ```text
/// config/sample_unit/
/// ├── board.yaml     # Unit metadata
/// ├── roles.yaml     # Role names
/// ├── staff.yaml     # Seed roster
/// └── vehicles.yaml  # Seed fleet (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_board::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample_unit").unwrap();
/// println!("Unit: {}", loader.metadata().unit_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BoardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `board.yaml`, `roles.yaml` or `staff.yaml` is missing
    /// - Any file contains invalid YAML
    /// - A staff entry names a role that is not in `roles.yaml`
    /// - A weekly contract is zero or longer than a week
    pub fn load<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let path = path.as_ref();

        let board_path = path.join("board.yaml");
        let metadata = Self::load_yaml::<BoardMetadata>(&board_path)?;
        if !WEEKLY_HOURS_RANGE.contains(&metadata.default_weekly_hours) {
            return Err(BoardError::ConfigParseError {
                path: board_path.display().to_string(),
                message: format!(
                    "default_weekly_hours must be between 1 and {}, got {}",
                    MAX_WEEKLY_HOURS, metadata.default_weekly_hours
                ),
            });
        }
        let roles = Self::load_yaml::<RolesConfig>(&path.join("roles.yaml"))?.roles;

        let staff_path = path.join("staff.yaml");
        let staff = Self::load_yaml::<StaffConfig>(&staff_path)?.staff;
        if let Some(seed) = staff.iter().find(|s| !roles.contains(&s.role)) {
            return Err(BoardError::ConfigParseError {
                path: staff_path.display().to_string(),
                message: format!(
                    "staff member '{}' references unknown role '{}'",
                    seed.full_name, seed.role
                ),
            });
        }

        if let Some((seed, hours)) = staff.iter().find_map(|s| {
            s.weekly_contracted_hours
                .filter(|h| !WEEKLY_HOURS_RANGE.contains(h))
                .map(|h| (s, h))
        }) {
            return Err(BoardError::ConfigParseError {
                path: staff_path.display().to_string(),
                message: format!(
                    "staff member '{}' has weekly_contracted_hours {}, expected 1 to {}",
                    seed.full_name, hours, MAX_WEEKLY_HOURS
                ),
            });
        }

        let vehicles = Self::load_vehicles(&path.join("vehicles.yaml"))?;

        debug!(
            unit = %metadata.unit_name,
            roles = roles.len(),
            staff = staff.len(),
            vehicles = vehicles.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: BoardConfig::new(metadata, roles, staff, vehicles),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BoardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BoardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BoardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The fleet file is optional; a missing file means no vehicles.
    fn load_vehicles(path: &Path) -> BoardResult<Vec<VehicleSeed>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        Ok(Self::load_yaml::<VehiclesConfig>(path)?.vehicles)
    }

    /// Returns the underlying board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the unit metadata.
    pub fn metadata(&self) -> &BoardMetadata {
        self.config.metadata()
    }
}
