//! Relay actuation timing.

use serde::Deserialize;

/// Relay hold times for one dispense pulse.
///
/// The high time is the minimum actuation dwell, the low time the minimum
/// recovery before the next point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispenseTiming {
    /// Time the relay is held high, in milliseconds.
    #[serde(default = "default_pulse_high_ms")]
    pub pulse_high_ms: u32,

    /// Time the relay is held low after a pulse, in milliseconds.
    #[serde(default = "default_pulse_low_ms")]
    pub pulse_low_ms: u32,
}

fn default_pulse_high_ms() -> u32 {
    500
}

fn default_pulse_low_ms() -> u32 {
    100
}

impl Default for DispenseTiming {
    fn default() -> Self {
        Self {
            pulse_high_ms: default_pulse_high_ms(),
            pulse_low_ms: default_pulse_low_ms(),
        }
    }
}
