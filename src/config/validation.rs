//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, AxisId, RigConfig};

/// Validate a rig configuration.
///
/// Checks:
/// - Steps per millimeter is positive
/// - Every axis has a finite, positive max speed and acceleration
/// - The relay high time is non-zero
/// - The ready marker is non-empty
pub fn validate_config(config: &RigConfig) -> Result<()> {
    if config.steps_per_mm.value() <= 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm(
            config.steps_per_mm.value(),
        )));
    }

    for (axis, axis_config) in config.axes.iter() {
        validate_axis(axis, axis_config)?;
    }

    // A zero low time is allowed, a zero high time never fires the dispenser
    if config.dispense.pulse_high_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidPulseTiming(
            config.dispense.pulse_high_ms,
        )));
    }

    if config.ready_marker.is_empty() {
        return Err(Error::Config(ConfigError::EmptyReadyMarker));
    }

    Ok(())
}

pub(crate) fn validate_axis(axis: AxisId, config: &AxisConfig) -> Result<()> {
    if !config.max_speed.is_finite() || config.max_speed <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed {
            axis,
            value: config.max_speed,
        }));
    }

    if !config.acceleration.is_finite() || config.acceleration <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration {
            axis,
            value: config.acceleration,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepsPerMm;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RigConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_steps_per_mm() {
        let config = RigConfig {
            steps_per_mm: StepsPerMm::new(0),
            ..RigConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidStepsPerMm(0)))
        ));
    }

    #[test]
    fn test_negative_axis_speed() {
        let mut config = RigConfig::default();
        config.axes.y.max_speed = -10.0;

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidMaxSpeed { axis: AxisId::Y, .. }))
        ));
    }

    #[test]
    fn test_nan_acceleration() {
        let mut config = RigConfig::default();
        config.axes.z.acceleration = f32::NAN;

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidAcceleration { axis: AxisId::Z, .. }))
        ));
    }

    #[test]
    fn test_zero_pulse_high() {
        let mut config = RigConfig::default();
        config.dispense.pulse_high_ms = 0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_ready_marker() {
        let mut config = RigConfig::default();
        config.ready_marker.clear();

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::EmptyReadyMarker))
        );
    }
}
