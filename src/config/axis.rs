//! Axis identifiers and per-axis configuration from TOML.

use core::fmt;

use serde::Deserialize;

/// One of the rig's linear axes.
///
/// On the serial line the axes are addressed as motors 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Motor 1, the dispensing (column) axis.
    X,
    /// Motor 2, the row axis.
    Y,
    /// Motor 3.
    Z,
}

impl AxisId {
    /// All axes in dispatch order.
    pub const ALL: [AxisId; 3] = [AxisId::X, AxisId::Y, AxisId::Z];

    /// Zero-based storage index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AxisId::X => 0,
            AxisId::Y => 1,
            AxisId::Z => 2,
        }
    }

    /// One-based motor number used by the `D` command.
    #[inline]
    pub const fn motor_number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Look up an axis by its motor number (1, 2 or 3).
    pub fn from_motor_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(AxisId::X),
            2 => Some(AxisId::Y),
            3 => Some(AxisId::Z),
            _ => None,
        }
    }

    /// Axis letter.
    #[inline]
    pub const fn letter(self) -> &'static str {
        match self {
            AxisId::X => "X",
            AxisId::Y => "Y",
            AxisId::Z => "Z",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Motion settings for a single axis.
///
/// Speeds are in the driver's raw units (steps per second), the same units
/// the `X` and `A` serial commands use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// Maximum speed in steps per second.
    pub max_speed: f32,

    /// Acceleration in steps per second squared.
    pub acceleration: f32,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

impl AxisConfig {
    /// Create a new axis configuration.
    pub const fn new(max_speed: f32, acceleration: f32) -> Self {
        Self {
            max_speed,
            acceleration,
            invert_direction: false,
        }
    }

    /// Stock settings for the planar X and Y axes.
    pub const fn planar_default() -> Self {
        Self::new(2000.0, 1000.0)
    }

    /// Stock settings for the vertical Z axis.
    pub const fn vertical_default() -> Self {
        Self::new(1000.0, 500.0)
    }
}

/// Settings for all three axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxesConfig {
    /// Motor 1.
    #[serde(default = "AxisConfig::planar_default")]
    pub x: AxisConfig,

    /// Motor 2.
    #[serde(default = "AxisConfig::planar_default")]
    pub y: AxisConfig,

    /// Motor 3.
    #[serde(default = "AxisConfig::vertical_default")]
    pub z: AxisConfig,
}

impl AxesConfig {
    /// Get the configuration of one axis.
    pub fn get(&self, axis: AxisId) -> &AxisConfig {
        match axis {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
            AxisId::Z => &self.z,
        }
    }

    /// Iterate `(axis, config)` pairs in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisId, &AxisConfig)> {
        AxisId::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            x: AxisConfig::planar_default(),
            y: AxisConfig::planar_default(),
            z: AxisConfig::vertical_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motor_numbers_round_trip() {
        for axis in AxisId::ALL {
            assert_eq!(AxisId::from_motor_number(axis.motor_number() as i32), Some(axis));
        }
        assert_eq!(AxisId::from_motor_number(0), None);
        assert_eq!(AxisId::from_motor_number(4), None);
    }

    #[test]
    fn test_default_speeds() {
        let axes = AxesConfig::default();
        assert_eq!(axes.get(AxisId::X).max_speed, 2000.0);
        assert_eq!(axes.get(AxisId::Y).acceleration, 1000.0);
        assert_eq!(axes.get(AxisId::Z).max_speed, 1000.0);
        assert_eq!(axes.get(AxisId::Z).acceleration, 500.0);
    }
}
