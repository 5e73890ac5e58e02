//! Configuration loading for the shift board.
//!
//! This module loads the unit's metadata and the seed roles, roster and
//! fleet from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_board::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample_unit").unwrap();
//! println!("Loaded unit: {}", config.metadata().unit_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BoardConfig, BoardMetadata, RolesConfig, StaffConfig, StaffSeed, VehicleSeed, VehiclesConfig,
};
