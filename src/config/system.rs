//! Rig configuration - root configuration structure.

use heapless::String;
use serde::Deserialize;

use super::axis::{AxesConfig, AxisConfig, AxisId};
use super::dispense::DispenseTiming;
use super::units::StepsPerMm;

/// Root configuration structure from TOML.
///
/// Every field is optional; an empty document yields the stock rig.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RigConfig {
    /// Millimeter to micro-step scale shared by all axes.
    #[serde(default)]
    pub steps_per_mm: StepsPerMm,

    /// Line written once at start-up to tell the host the rig is ready.
    #[serde(default = "default_ready_marker")]
    pub ready_marker: String<8>,

    /// Per-axis motion settings.
    #[serde(default)]
    pub axes: AxesConfig,

    /// Relay timing for Auto mode.
    #[serde(default)]
    pub dispense: DispenseTiming,
}

fn default_ready_marker() -> String<8> {
    let mut marker = String::new();
    let _ = marker.push('v');
    marker
}

impl RigConfig {
    /// Get an axis configuration.
    pub fn axis(&self, axis: AxisId) -> &AxisConfig {
        self.axes.get(axis)
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            steps_per_mm: StepsPerMm::default(),
            ready_marker: default_ready_marker(),
            axes: AxesConfig::default(),
            dispense: DispenseTiming::default(),
        }
    }
}
