//! Software axis driver.
//!
//! Generic over embedded-hal 1.0 STEP/DIR pins and a delay provider. After
//! each STEP pulse the axis records how long until the next one is due.
//! [`AxisDriver::advance_step`] sleeps only for whatever part of that interval
//! has not already passed in [`AxisDriver::elapse`], so several axes pumped by
//! one loop each keep their own ramp timing.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::Steps;
use crate::error::AxisError;
use crate::motion::{Direction, MotionPhase, RampExecutor, RampProfile};

use super::driver::AxisDriver;

/// STEP pulse width in microseconds.
const PULSE_WIDTH_US: u32 = 2;

/// Stepper axis driven through STEP/DIR pins.
pub struct AccelAxis<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = forward unless inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current absolute position.
    position: Steps,

    /// Most recently requested target.
    target: Steps,

    /// Max speed in steps/s.
    max_speed: f32,

    /// Acceleration in steps/s².
    acceleration: f32,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Ramp for the move in progress, if any.
    executor: Option<RampExecutor>,

    /// Nanoseconds until the next step is due.
    due_in_ns: u32,
}

impl<STEP, DIR, DELAY> AccelAxis<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        max_speed: f32,
        acceleration: f32,
        invert_direction: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            position: Steps::ZERO,
            target: Steps::ZERO,
            max_speed,
            acceleration,
            current_direction: None,
            invert_direction,
            executor: None,
            due_in_ns: 0,
        }
    }

    /// Most recently requested target.
    #[inline]
    pub fn target(&self) -> Steps {
        self.target
    }

    /// Steps left in the move in progress.
    #[inline]
    pub fn distance_to_go(&self) -> Steps {
        self.target - self.position
    }

    /// Current max speed in steps/s.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Current acceleration in steps/s².
    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Phase of the move in progress.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.executor
            .as_ref()
            .map(|e| e.phase())
            .unwrap_or(MotionPhase::Complete)
    }

    /// Give back the pins and delay.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn plan(&mut self) {
        let mut delta = self.target - self.position;
        // A ramp counts at most u32::MAX steps
        if delta.abs() > u64::from(u32::MAX) {
            let limit = Steps(i64::from(u32::MAX));
            delta = if delta.value() < 0 { -limit } else { limit };
            self.target = self.position + delta;
            warn!("move clamped to {} steps", delta.value());
        }
        self.due_in_ns = 0;
        let profile = RampProfile::plan(delta.value(), self.max_speed, self.acceleration);
        self.executor = if profile.is_zero() {
            None
        } else {
            trace!("plan {} steps", delta.value());
            Some(RampExecutor::new(profile))
        };
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), AxisError> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Forward => !self.invert_direction,
            Direction::Reverse => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| AxisError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| AxisError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }
}

impl<STEP, DIR, DELAY> AxisDriver for AccelAxis<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn move_absolute(&mut self, target: Steps) {
        self.target = target;
        self.plan();
    }

    fn move_relative(&mut self, delta: Steps) {
        self.move_absolute(self.position + delta);
    }

    fn set_acceleration(&mut self, acceleration: f32) {
        if acceleration == 0.0 || !acceleration.is_finite() {
            warn!("ignoring acceleration {}", acceleration);
            return;
        }
        self.acceleration = acceleration.abs();
    }

    fn set_max_speed(&mut self, speed: f32) {
        if speed == 0.0 || !speed.is_finite() {
            warn!("ignoring max speed {}", speed);
            return;
        }
        self.max_speed = speed.abs();
    }

    fn set_current_position(&mut self, position: Steps) {
        self.position = position;
        self.target = position;
        self.executor = None;
        self.due_in_ns = 0;
    }

    fn current_position(&self) -> Steps {
        self.position
    }

    fn advance_step(&mut self) -> Result<(), AxisError> {
        let pending = self
            .executor
            .as_ref()
            .filter(|e| !e.is_complete())
            .map(|e| e.profile().direction);
        let Some(direction) = pending else {
            self.executor = None;
            return Ok(());
        };

        if self.due_in_ns > 0 {
            self.delay.delay_ns(self.due_in_ns);
            self.due_in_ns = 0;
        }

        self.set_direction(direction)?;

        self.step_pin.set_high().map_err(|_| AxisError::PinError)?;
        self.delay.delay_us(PULSE_WIDTH_US);
        self.step_pin.set_low().map_err(|_| AxisError::PinError)?;

        self.position = self.position + Steps(direction.sign());

        let (interval_ns, has_more) = match self.executor.as_mut() {
            Some(executor) => (executor.current_interval_ns(), executor.advance()),
            None => (0, false),
        };

        if has_more {
            self.due_in_ns = interval_ns.saturating_sub(PULSE_WIDTH_US * 1000);
        } else {
            self.executor = None;
        }

        Ok(())
    }

    fn is_moving(&self) -> bool {
        self.executor
            .as_ref()
            .map(|e| !e.is_complete())
            .unwrap_or(false)
    }

    fn next_step_in_ns(&self) -> Option<u32> {
        self.is_moving().then_some(self.due_in_ns)
    }

    fn elapse(&mut self, ns: u32) {
        self.due_in_ns = self.due_in_ns.saturating_sub(ns);
    }
}
