//! Builder pattern for AccelAxis.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::validation::validate_axis;
use crate::config::{AxisConfig, AxisId, RigConfig};
use crate::error::{ConfigError, Error, Result};

use super::accel::AccelAxis;

/// Builder for creating AccelAxis instances.
pub struct AccelAxisBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    axis: AxisId,
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    config: AxisConfig,
}

impl<STEP, DIR, DELAY> AccelAxisBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder for an axis, starting from its power-on defaults.
    pub fn new(axis: AxisId) -> Self {
        let config = match axis {
            AxisId::Z => AxisConfig::vertical_default(),
            AxisId::X | AxisId::Y => AxisConfig::planar_default(),
        };
        Self {
            axis,
            step_pin: None,
            dir_pin: None,
            delay: None,
            config,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set maximum speed in steps per second.
    pub fn max_speed(mut self, speed: f32) -> Self {
        self.config.max_speed = speed;
        self
    }

    /// Set acceleration in steps per second squared.
    pub fn acceleration(mut self, acceleration: f32) -> Self {
        self.config.acceleration = acceleration;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.config.invert_direction = invert;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Configure from the rig configuration entry for this builder's axis.
    pub fn from_config(self, config: &RigConfig) -> Self {
        let axis_config = config.axis(self.axis).clone();
        self.from_axis_config(&axis_config)
    }

    /// Build the AccelAxis.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the delay is missing, or if the motion
    /// settings are not positive.
    pub fn build(self) -> Result<AccelAxis<STEP, DIR, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        validate_axis(self.axis, &self.config)?;

        Ok(AccelAxis::new(
            step_pin,
            dir_pin,
            delay,
            self.config.max_speed,
            self.config.acceleration,
            self.config.invert_direction,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::Mock as PinMock;

    type TestBuilder = AccelAxisBuilder<PinMock, PinMock, NoopDelay>;

    #[test]
    fn test_missing_step_pin() {
        let mut dir = PinMock::new(&[]);
        let result = TestBuilder::new(AxisId::X)
            .dir_pin(dir.clone())
            .delay(NoopDelay::new())
            .build();

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField("step_pin")))
        ));
        dir.done();
    }

    #[test]
    fn test_builds_with_config() {
        let mut config = RigConfig::default();
        config.axes.y.max_speed = 1234.0;

        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);
        let axis = TestBuilder::new(AxisId::Y)
            .step_pin(step.clone())
            .dir_pin(dir.clone())
            .delay(NoopDelay::new())
            .from_config(&config)
            .build()
            .unwrap();

        assert_eq!(axis.max_speed(), 1234.0);
        assert_eq!(axis.acceleration(), 1000.0);
        step.done();
        dir.done();
    }

    #[test]
    fn test_rejects_zero_acceleration() {
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);
        let result = TestBuilder::new(AxisId::Z)
            .step_pin(step.clone())
            .dir_pin(dir.clone())
            .delay(NoopDelay::new())
            .acceleration(0.0)
            .build();

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidAcceleration { axis: AxisId::Z, .. }))
        ));
        step.done();
        dir.done();
    }
}
