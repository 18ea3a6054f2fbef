//! Configuration module for dispense-rig.
//!
//! Provides types for loading and validating the rig configuration from TOML
//! files (with `std` feature) or building it in code.

mod axis;
mod dispense;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
pub(crate) mod validation;

pub use axis::{AxesConfig, AxisConfig, AxisId};
pub use dispense::DispenseTiming;
pub use system::RigConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, Steps, StepsPerMm, DEFAULT_STEPS_PER_MM};
