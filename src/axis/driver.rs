//! The axis driver capability.

use crate::config::Steps;
use crate::error::AxisError;

/// A single linear axis able to run to a step target.
///
/// This is the only way the command interpreter touches motion hardware.
/// Implementations own position, speed and acceleration; the interpreter only
/// issues targets and pumps [`advance_step`](AxisDriver::advance_step) until
/// [`is_moving`](AxisDriver::is_moving) turns false.
///
/// Targets are absolute micro-step counts from the zero reference. Speed and
/// acceleration are in the driver's raw units (steps/s and steps/s²).
pub trait AxisDriver {
    /// Start a move to an absolute target. Does not block.
    fn move_absolute(&mut self, target: Steps);

    /// Start a move relative to the current position. Does not block.
    fn move_relative(&mut self, delta: Steps);

    /// Set the acceleration rate.
    fn set_acceleration(&mut self, acceleration: f32);

    /// Set the maximum speed.
    fn set_max_speed(&mut self, speed: f32);

    /// Redefine the current position without moving. Cancels any pending move.
    fn set_current_position(&mut self, position: Steps);

    /// Current position in steps.
    fn current_position(&self) -> Steps;

    /// Emit the next step, first waiting out whatever remains of the current
    /// step interval. A no-op when idle.
    fn advance_step(&mut self) -> Result<(), AxisError>;

    /// Whether a move is still in progress.
    fn is_moving(&self) -> bool;

    /// Nanoseconds until the next step is due, or `None` when idle.
    ///
    /// Drivers without interval timing report `Some(0)` while moving.
    fn next_step_in_ns(&self) -> Option<u32> {
        self.is_moving().then_some(0)
    }

    /// Account for `ns` nanoseconds spent pumping other axes.
    fn elapse(&mut self, _ns: u32) {}

    /// Move to an absolute target and block until it is reached.
    fn move_absolute_blocking(&mut self, target: Steps) -> Result<(), AxisError> {
        self.move_absolute(target);
        run_until_idle(self)
    }
}

/// Pump an axis until it stops moving.
///
/// There is no timeout: a driver that never reports idle blocks forever.
pub fn run_until_idle<A: AxisDriver + ?Sized>(axis: &mut A) -> Result<(), AxisError> {
    while axis.is_moving() {
        axis.advance_step()?;
    }
    Ok(())
}
