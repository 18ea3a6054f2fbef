//! The rig's three axes, addressed by [`AxisId`].

use crate::config::{AxisId, RigConfig, Steps};
use crate::error::AxisError;

use super::driver::AxisDriver;

/// Owns one driver per axis.
///
/// Two-axis rigs still supply a Z driver; it is simply never selected.
#[derive(Debug)]
pub struct Axes<A> {
    drivers: [A; 3],
}

impl<A: AxisDriver> Axes<A> {
    /// Group three drivers as motors 1 (X), 2 (Y) and 3 (Z).
    pub fn new(x: A, y: A, z: A) -> Self {
        Self { drivers: [x, y, z] }
    }

    /// Get one axis.
    #[inline]
    pub fn get(&self, axis: AxisId) -> &A {
        &self.drivers[axis.index()]
    }

    /// Get one axis mutably.
    #[inline]
    pub fn get_mut(&mut self, axis: AxisId) -> &mut A {
        &mut self.drivers[axis.index()]
    }

    /// Iterate `(axis, driver)` pairs in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisId, &A)> {
        AxisId::ALL.into_iter().zip(self.drivers.iter())
    }

    /// Iterate `(axis, driver)` pairs mutably in dispatch order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AxisId, &mut A)> {
        AxisId::ALL.into_iter().zip(self.drivers.iter_mut())
    }

    /// Current positions of X, Y and Z.
    pub fn positions(&self) -> [Steps; 3] {
        [
            self.drivers[0].current_position(),
            self.drivers[1].current_position(),
            self.drivers[2].current_position(),
        ]
    }

    /// Whether any axis is still moving.
    pub fn any_moving(&self) -> bool {
        self.drivers.iter().any(AxisDriver::is_moving)
    }

    /// Step every axis until none reports movement.
    ///
    /// Always steps the axis whose next step is due soonest, after crediting
    /// that wait to the others, so moves started together progress together
    /// at their own speeds.
    pub fn settle(&mut self) -> Result<(), AxisError> {
        loop {
            let next = self
                .drivers
                .iter()
                .enumerate()
                .filter_map(|(i, driver)| driver.next_step_in_ns().map(|ns| (i, ns)))
                .min_by_key(|&(_, ns)| ns);
            let Some((index, wait_ns)) = next else {
                return Ok(());
            };

            for (i, driver) in self.drivers.iter_mut().enumerate() {
                if i != index {
                    driver.elapse(wait_ns);
                }
            }
            self.drivers[index].advance_step()?;
        }
    }

    /// Define the current location of every axis as zero.
    pub fn zero_all(&mut self) {
        for driver in self.drivers.iter_mut() {
            driver.set_current_position(Steps::ZERO);
        }
    }

    /// Apply the configured speed and acceleration to every axis.
    pub fn apply_config(&mut self, config: &RigConfig) {
        for (axis, driver) in self.iter_mut() {
            let axis_config = config.axis(axis);
            driver.set_max_speed(axis_config.max_speed);
            driver.set_acceleration(axis_config.acceleration);
        }
    }
}
